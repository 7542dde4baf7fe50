use crate::domain::Record;
use crate::error::CoreError;
use std::collections::HashMap;
use std::slice;

/// The address book: records keyed by name, iterated in insertion order.
///
/// Only the operations below touch the records, so a name can never be
/// filed twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: Record) -> Result<(), CoreError> {
        let key = record.name().as_str();
        if self.index.contains_key(key) {
            return Err(CoreError::DuplicateName(key.to_string()));
        }
        self.index.insert(key.to_string(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&Record, CoreError> {
        let index = self.position(name)?;
        Ok(&self.records[index])
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, CoreError> {
        let index = self.position(name)?;
        Ok(&mut self.records[index])
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, CoreError> {
        let index = self.position(name)?;
        let removed = self.records.remove(index);
        self.index.remove(name);
        for slot in self.index.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Result<usize, CoreError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::RecordNotFound(name.to_string()))
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
