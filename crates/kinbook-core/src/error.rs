use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),
    #[error("invalid birthday format: {0:?} (expected DD.MM.YYYY)")]
    InvalidBirthdayFormat(String),
    #[error("birthday out of range: {0}")]
    InvalidBirthdayRange(NaiveDate),
    #[error("phone not found: {0}")]
    PhoneNotFound(String),
    #[error("record not found: {0}")]
    RecordNotFound(String),
    #[error("duplicate name: {0}")]
    DuplicateName(String),
}
