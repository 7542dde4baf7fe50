use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_NAME_CHARS: usize = 3;

/// Contact name, at least [`MIN_NAME_CHARS`] characters long.
///
/// The value is kept exactly as typed; it is also the key the
/// [`Directory`](crate::Directory) files the record under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        Ok(Self(validate_name(raw)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_valid_name(&value) {
            return Err(CoreError::InvalidName(value));
        }
        Ok(Self(value))
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn validate_name(raw: &str) -> Result<String, CoreError> {
    if !is_valid_name(raw) {
        return Err(CoreError::InvalidName(raw.to_string()));
    }
    Ok(raw.to_string())
}

fn is_valid_name(raw: &str) -> bool {
    raw.chars().count() >= MIN_NAME_CHARS
}
