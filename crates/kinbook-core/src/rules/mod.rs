pub mod birthdays;
pub mod dates;

pub use birthdays::{
    birthdays_per_week, next_occurrence, BirthdayReport, WeekdayBucket, LOOKAHEAD_DAYS,
    NO_UPCOMING_BIRTHDAYS,
};
pub use dates::{occurrence_in_year, roll_weekend_to_monday, weekday_name};
