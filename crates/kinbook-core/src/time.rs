use chrono::{Local, NaiveDate};
use thiserror::Error;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("date cannot be empty")]
    Empty,
    #[error("invalid date format: expected YYYY-MM-DD")]
    InvalidDateFormat,
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_iso_date(input: &str) -> Result<NaiveDate, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|_| TimeParseError::InvalidDateFormat)
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_iso_date, parse_iso_date, TimeParseError};
    use chrono::NaiveDate;

    #[test]
    fn parse_iso_date_accepts_padded_input() {
        let date = parse_iso_date("  2030-01-15 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2030, 1, 15).unwrap());
    }

    #[test]
    fn parse_iso_date_rejects_empty() {
        let err = parse_iso_date("").unwrap_err();
        assert_eq!(err, TimeParseError::Empty);
    }

    #[test]
    fn parse_iso_date_rejects_other_formats() {
        let err = parse_iso_date("15.01.2030").unwrap_err();
        assert_eq!(err, TimeParseError::InvalidDateFormat);
    }

    #[test]
    fn format_iso_date_pads_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_iso_date(date), "2024-03-05");
    }
}
