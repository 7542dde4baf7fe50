use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// The birthday's month and day in `year`. February 29 falls back to
/// March 1 when `year` is not a leap year.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    // Feb 29 is the only month/day that can be missing from a year.
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

pub fn roll_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::{occurrence_in_year, roll_weekend_to_monday, weekday_name};
    use chrono::{NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn occurrence_keeps_month_and_day() {
        assert_eq!(
            occurrence_in_year(date(1990, 3, 15), 2024),
            Some(date(2024, 3, 15))
        );
    }

    #[test]
    fn occurrence_leap_day_fallback() {
        assert_eq!(
            occurrence_in_year(date(2000, 2, 29), 2023),
            Some(date(2023, 3, 1))
        );
        assert_eq!(
            occurrence_in_year(date(2000, 2, 29), 2024),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn weekend_rolls_to_monday() {
        assert_eq!(roll_weekend_to_monday(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(roll_weekend_to_monday(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(roll_weekend_to_monday(date(2024, 6, 14)), date(2024, 6, 14));
        assert_eq!(roll_weekend_to_monday(date(2024, 6, 17)), date(2024, 6, 17));
    }

    #[test]
    fn leap_day_fallback_follows_century_rule() {
        assert_eq!(
            occurrence_in_year(date(2000, 2, 29), 1900),
            Some(date(1900, 3, 1))
        );
        assert_eq!(
            occurrence_in_year(date(1996, 2, 29), 2000),
            Some(date(2000, 2, 29))
        );
    }

    #[test]
    fn weekday_names_are_full_english() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }
}
