//! Week-window arithmetic for the games rotation.
//!
//! Weekdays are counted from Sunday = 0, so Monday = 1 and Friday = 5.

use crate::sheet::CellValue;
use crate::utils::date::TimeZoneSetting;
use chrono::{Datelike, Duration, NaiveDate};

const FRIDAY: i64 = 5;

fn weekday_from_sunday(d: NaiveDate) -> i64 {
    d.weekday().num_days_from_sunday() as i64
}

/// `now` itself on a Friday, otherwise the next Friday.
pub fn upcoming_friday(now: NaiveDate) -> NaiveDate {
    let ahead = (FRIDAY - weekday_from_sunday(now) + 7) % 7;
    now + Duration::days(ahead)
}

/// Monday of the week containing `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    let back = (weekday_from_sunday(date) + 6) % 7;
    date - Duration::days(back)
}

/// The two dates a game row's `WeekStart` may carry to count as current:
/// the Monday of the target week and the target Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptableStarts {
    pub monday: NaiveDate,
    pub friday: NaiveDate,
}

impl AcceptableStarts {
    pub fn for_date(now: NaiveDate) -> Self {
        let friday = upcoming_friday(now);
        Self {
            monday: week_start_of(friday),
            friday,
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day == self.monday || day == self.friday
    }

    /// Day-equality of a stored cell against either member of the set.
    /// Unparseable or empty cells never match.
    pub fn matches(&self, cell: &CellValue, tz: &TimeZoneSetting) -> bool {
        self.dates().iter().any(|d| same_day(cell, *d, tz))
    }

    pub fn dates(&self) -> [NaiveDate; 2] {
        [self.monday, self.friday]
    }
}

/// True when `cell` parses to the same calendar day as `target`.
pub fn same_day(cell: &CellValue, target: NaiveDate, tz: &TimeZoneSetting) -> bool {
    cell.to_date(tz).map(|d| d == target).unwrap_or(false)
}
