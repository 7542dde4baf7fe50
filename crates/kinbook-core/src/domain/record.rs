use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::CoreError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// One contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
///
/// Serialize-only: records are rebuilt through the validating constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Index of the first phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Result<usize, CoreError> {
        self.phones
            .iter()
            .position(|phone| phone.as_str() == raw)
            .ok_or_else(|| CoreError::PhoneNotFound(raw.to_string()))
    }

    pub fn delete_phone(&mut self, raw: &str) -> Result<PhoneNumber, CoreError> {
        let index = self.find_phone(raw)?;
        Ok(self.phones.remove(index))
    }

    /// Replaces `old` with `new` at the same position. Nothing changes unless
    /// `old` exists and `new` is valid.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let index = self.find_phone(old)?;
        let phone = PhoneNumber::new(new)?;
        self.phones[index] = phone;
        Ok(())
    }

    pub fn set_birthday(&mut self, raw: &str, today: NaiveDate) -> Result<Birthday, CoreError> {
        let birthday = Birthday::parse(raw, today)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }

    pub fn set_birthday_value(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        if self.phones.is_empty() {
            f.write_str("None")?;
        } else {
            let joined = self
                .phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            f.write_str(&joined)?;
        }
        match self.birthday {
            Some(birthday) => write!(f, ", birthday: {}", birthday),
            None => f.write_str(", birthday: None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::error::CoreError;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    #[test]
    fn new_record_starts_empty() {
        let record = Record::new("Alice").unwrap();
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn new_record_rejects_short_name() {
        assert_eq!(
            Record::new("Al").unwrap_err(),
            CoreError::InvalidName("Al".to_string())
        );
    }

    #[test]
    fn add_phone_keeps_insertion_order_and_duplicates() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1111111111", "2222222222", "1111111111"]);
        assert_eq!(record.find_phone("1111111111").unwrap(), 0);
    }

    #[test]
    fn add_phone_rejects_invalid_value() {
        let mut record = Record::new("Alice").unwrap();
        assert!(matches!(
            record.add_phone("12345"),
            Err(CoreError::InvalidPhone(_))
        ));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1234567890").unwrap();
        record.edit_phone("1234567890", "0987654321").unwrap();
        assert_eq!(record.find_phone("0987654321").unwrap(), 0);
        assert_eq!(
            record.find_phone("1234567890").unwrap_err(),
            CoreError::PhoneNotFound("1234567890".to_string())
        );
    }

    #[test]
    fn edit_phone_preserves_position() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("3333333333").unwrap();
        record.edit_phone("2222222222", "4444444444").unwrap();
        assert_eq!(record.find_phone("4444444444").unwrap(), 1);
        assert_eq!(record.phones().len(), 3);
    }

    #[test]
    fn edit_phone_with_invalid_new_value_leaves_old_value() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1234567890").unwrap();
        assert!(matches!(
            record.edit_phone("1234567890", "bad"),
            Err(CoreError::InvalidPhone(_))
        ));
        assert_eq!(record.find_phone("1234567890").unwrap(), 0);
    }

    #[test]
    fn edit_phone_missing_old_value_is_not_found() {
        let mut record = Record::new("Alice").unwrap();
        assert!(matches!(
            record.edit_phone("1234567890", "0987654321"),
            Err(CoreError::PhoneNotFound(_))
        ));
    }

    #[test]
    fn delete_phone_removes_first_match() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        let removed = record.delete_phone("1111111111").unwrap();
        assert_eq!(removed.as_str(), "1111111111");
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["2222222222", "1111111111"]);
        assert!(matches!(
            record.delete_phone("9999999999"),
            Err(CoreError::PhoneNotFound(_))
        ));
    }

    #[test]
    fn set_birthday_overwrites_previous_value() {
        let mut record = Record::new("Alice").unwrap();
        record.set_birthday("01.01.1990", today()).unwrap();
        record.set_birthday("02.02.1992", today()).unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn set_birthday_failure_keeps_previous_value() {
        let mut record = Record::new("Alice").unwrap();
        record.set_birthday("01.01.1990", today()).unwrap();
        assert!(record.set_birthday("31.02.1990", today()).is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1990");
    }

    #[test]
    fn display_uses_none_markers() {
        let record = Record::new("Alice").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: None, birthday: None"
        );
    }

    #[test]
    fn display_joins_phones_and_formats_birthday() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.set_birthday("05.03.1990", today()).unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1111111111; 2222222222, birthday: 05.03.1990"
        );
    }

    #[test]
    fn record_serializes_with_iso_birthday() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.set_birthday("05.03.1990", today()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "Alice");
        assert_eq!(value["phones"][0], "1111111111");
        assert_eq!(value["birthday"], "1990-03-05");
    }
}
