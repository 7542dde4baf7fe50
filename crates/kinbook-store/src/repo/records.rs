use crate::error::{Result, StoreError};
use kinbook_core::time::{format_iso_date, parse_iso_date};
use kinbook_core::{Birthday, Directory, PhoneNumber, Record};
use rusqlite::{params, Connection};
use std::collections::HashMap;

pub struct RecordsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> RecordsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM records;", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Rebuilds the address book in stored order. Names and phones go back
    /// through the core constructors.
    pub fn load_directory(&self) -> Result<Directory> {
        let mut phones = self.load_phones()?;

        let mut stmt = self
            .conn
            .prepare("SELECT name, birthday FROM records ORDER BY position ASC;")?;
        let mut rows = stmt.query([])?;
        let mut directory = Directory::new();
        while let Some(row) = rows.next()? {
            let name: String = row.get(0)?;
            let birthday: Option<String> = row.get(1)?;

            let mut record = Record::new(&name)?;
            for number in phones.remove(&name).unwrap_or_default() {
                record.push_phone(PhoneNumber::new(&number)?);
            }
            if let Some(raw) = birthday {
                let date = parse_iso_date(&raw).map_err(|err| StoreError::CorruptRecord {
                    name: name.clone(),
                    reason: format!("birthday {raw:?}: {err}"),
                })?;
                record.set_birthday_value(Birthday::from_date(date));
            }
            directory.add(record)?;
        }

        Ok(directory)
    }

    /// Swaps the stored snapshot for `directory` in one transaction.
    pub fn replace_all(&self, directory: &Directory) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM phones;", [])?;
        tx.execute("DELETE FROM records;", [])?;

        {
            let mut insert_record = tx.prepare(
                "INSERT INTO records (name, position, birthday) VALUES (?1, ?2, ?3);",
            )?;
            let mut insert_phone = tx.prepare(
                "INSERT INTO phones (record_name, position, number) VALUES (?1, ?2, ?3);",
            )?;

            for (position, record) in directory.iter().enumerate() {
                let name = record.name().as_str();
                let birthday = record.birthday().map(|b| format_iso_date(b.date()));
                insert_record.execute(params![name, position as i64, birthday])?;
                for (phone_position, phone) in record.phones().iter().enumerate() {
                    insert_phone.execute(params![name, phone_position as i64, phone.as_str()])?;
                }
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn load_phones(&self) -> Result<HashMap<String, Vec<String>>> {
        let mut stmt = self.conn.prepare(
            "SELECT record_name, number FROM phones ORDER BY record_name ASC, position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        while let Some(row) = rows.next()? {
            let name: String = row.get(0)?;
            let number: String = row.get(1)?;
            map.entry(name).or_default().push(number);
        }
        Ok(map)
    }
}
