use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        Ok(Self(validate_phone(raw)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_valid_phone(&value) {
            return Err(CoreError::InvalidPhone(value));
        }
        Ok(Self(value))
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepts exactly ten ASCII digits. Formatting characters are not stripped.
pub fn validate_phone(raw: &str) -> Result<String, CoreError> {
    if !is_valid_phone(raw) {
        return Err(CoreError::InvalidPhone(raw.to_string()));
    }
    Ok(raw.to_string())
}

fn is_valid_phone(raw: &str) -> bool {
    raw.len() == PHONE_DIGITS && raw.bytes().all(|b| b.is_ascii_digit())
}
