use crate::error::CoreError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";
pub const MAX_BIRTHDAY_AGE_DAYS: i64 = 100 * 365;

/// Serializes as the bare ISO date. There is no `Deserialize`; see
/// [`Birthday::parse`] and [`Birthday::from_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, CoreError> {
        Ok(Self(validate_birthday(raw, today)?))
    }

    /// Wraps a date that was validated when it was first written.
    ///
    /// The age window is relative to the day of entry, so a stored value is
    /// not re-checked against a later "today".
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

pub fn validate_birthday(raw: &str, today: NaiveDate) -> Result<NaiveDate, CoreError> {
    let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
        .map_err(|_| CoreError::InvalidBirthdayFormat(raw.to_string()))?;

    let age_days = (today - date).num_days();
    if age_days <= 0 || age_days >= MAX_BIRTHDAY_AGE_DAYS {
        return Err(CoreError::InvalidBirthdayRange(date));
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::{validate_birthday, Birthday, MAX_BIRTHDAY_AGE_DAYS};
    use crate::error::CoreError;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    #[test]
    fn validate_birthday_parses_day_month_year() {
        let date = validate_birthday("15.03.1990", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());
    }

    #[test]
    fn validate_birthday_accepts_leap_day_in_leap_year() {
        let date = validate_birthday("29.02.2000", today()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
    }

    #[test]
    fn validate_birthday_rejects_leap_day_in_common_year() {
        let err = validate_birthday("29.02.2001", today()).unwrap_err();
        assert_eq!(err, CoreError::InvalidBirthdayFormat("29.02.2001".to_string()));
    }

    #[test]
    fn validate_birthday_rejects_other_formats() {
        for raw in ["1990-03-15", "15/03/1990", "yesterday", "", "32.01.1990"] {
            assert!(matches!(
                validate_birthday(raw, today()),
                Err(CoreError::InvalidBirthdayFormat(_))
            ));
        }
    }

    #[test]
    fn validate_birthday_rejects_today_and_future() {
        assert!(matches!(
            validate_birthday("12.06.2024", today()),
            Err(CoreError::InvalidBirthdayRange(_))
        ));
        assert!(matches!(
            validate_birthday("13.06.2024", today()),
            Err(CoreError::InvalidBirthdayRange(_))
        ));
        assert!(validate_birthday("11.06.2024", today()).is_ok());
    }

    #[test]
    fn validate_birthday_rejects_more_than_a_century_ago() {
        assert!(matches!(
            validate_birthday("01.01.1900", today()),
            Err(CoreError::InvalidBirthdayRange(_))
        ));

        let oldest_ok = today() - Duration::days(MAX_BIRTHDAY_AGE_DAYS - 1);
        let raw = oldest_ok.format("%d.%m.%Y").to_string();
        assert!(validate_birthday(&raw, today()).is_ok());

        let too_old = today() - Duration::days(MAX_BIRTHDAY_AGE_DAYS);
        let raw = too_old.format("%d.%m.%Y").to_string();
        assert!(validate_birthday(&raw, today()).is_err());
    }

    #[test]
    fn birthday_displays_in_entry_format() {
        let birthday = Birthday::parse("05.03.1990", today()).unwrap();
        assert_eq!(birthday.to_string(), "05.03.1990");
    }

    #[test]
    fn birthday_serializes_as_iso_date() {
        let birthday = Birthday::parse("05.03.1990", today()).unwrap();
        assert_eq!(serde_json::to_value(birthday).unwrap(), "1990-03-05");
    }
}
