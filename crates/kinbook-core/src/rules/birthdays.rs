use crate::directory::Directory;
use crate::rules::dates::{occurrence_in_year, roll_weekend_to_monday, weekday_name};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Occurrences must land fewer than this many days after today. There is
/// no lower bound: a date already behind us this year still qualifies.
pub const LOOKAHEAD_DAYS: i64 = 7;
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayBucket {
    #[serde(rename = "day", serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BirthdayReport {
    pub this_week: Vec<WeekdayBucket>,
    pub next_week: Vec<WeekdayBucket>,
}

impl BirthdayReport {
    pub fn is_empty(&self) -> bool {
        self.this_week.is_empty() && self.next_week.is_empty()
    }

    /// Text form of the report, or [`NO_UPCOMING_BIRTHDAYS`] when nothing
    /// qualified.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return NO_UPCOMING_BIRTHDAYS.to_string();
        }

        let mut lines = Vec::new();
        push_section(&mut lines, "This week:", &self.this_week);
        push_section(&mut lines, "Next week:", &self.next_week);
        lines.join("\n")
    }
}

impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Day the birthday is observed on, counted from `today`.
///
/// The occurrence is taken in today's year, except that a January date
/// already behind us moves to next year. Weekend dates move to the
/// following Monday.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let mut occurrence = occurrence_in_year(birthday, today.year())?;
    if occurrence < today && occurrence.month() == 1 {
        occurrence = occurrence_in_year(birthday, today.year() + 1)?;
    }
    Some(roll_weekend_to_monday(occurrence))
}

/// Groups by weekday the names of everyone whose birthday is observed less
/// than [`LOOKAHEAD_DAYS`] days after `today`, earlier dates included.
///
/// Weekdays from today's onward belong to this week, earlier weekdays to
/// next week. Names keep directory order within a day.
pub fn birthdays_per_week(directory: &Directory, today: NaiveDate) -> BirthdayReport {
    let mut by_weekday: BTreeMap<u32, WeekdayBucket> = BTreeMap::new();

    for record in directory {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(occurrence) = next_occurrence(birthday.date(), today) else {
            continue;
        };

        let delta_days = (occurrence - today).num_days();
        if delta_days >= LOOKAHEAD_DAYS {
            continue;
        }

        let weekday = occurrence.weekday();
        by_weekday
            .entry(weekday.num_days_from_monday())
            .or_insert_with(|| WeekdayBucket {
                weekday,
                names: Vec::new(),
            })
            .names
            .push(record.name().as_str().to_string());
    }

    let today_index = today.weekday().num_days_from_monday();
    let mut report = BirthdayReport::default();
    for (index, bucket) in by_weekday {
        if index >= today_index {
            report.this_week.push(bucket);
        } else {
            report.next_week.push(bucket);
        }
    }
    report
}

fn push_section(lines: &mut Vec<String>, header: &str, buckets: &[WeekdayBucket]) {
    if buckets.is_empty() {
        return;
    }
    lines.push(header.to_string());
    for bucket in buckets {
        lines.push(format!(
            "{}: {}",
            weekday_name(bucket.weekday),
            bucket.names.join(", ")
        ));
    }
}

fn serialize_weekday<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*weekday))
}
