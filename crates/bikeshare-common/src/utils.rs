//! Shared utility functions for durations and calendar names.

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

// chrono only formats weekdays in abbreviated form
const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// An elapsed time split into whole days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationParts {
    /// Whole days (carries the sign for negative totals)
    pub days: i64,
    /// Remaining hours, 0-23
    pub hours: i64,
    /// Remaining minutes, 0-59
    pub minutes: i64,
    /// Remaining seconds, 0-59
    pub seconds: i64,
}

impl DurationParts {
    /// Decomposes a number of elapsed seconds. Not calendar-aware.
    pub const fn from_seconds(total_seconds: i64) -> Self {
        let days = total_seconds.div_euclid(SECONDS_PER_DAY);
        let rest = total_seconds.rem_euclid(SECONDS_PER_DAY);
        Self {
            days,
            hours: rest / SECONDS_PER_HOUR,
            minutes: rest % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: rest % SECONDS_PER_MINUTE,
        }
    }

    /// Recombines the parts into elapsed seconds.
    pub const fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes and {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Full English name of a 1-based calendar month.
pub fn month_name(month: u32) -> Option<&'static str> {
    let month = Month::try_from(u8::try_from(month).ok()?).ok()?;
    Some(month.name())
}

/// Full English name of a Monday-based weekday index.
pub fn weekday_name(day_of_week: u32) -> Option<&'static str> {
    WEEKDAY_NAMES.get(usize::try_from(day_of_week).ok()?).copied()
}

/// Joins choices in title case for prompt text, e.g. `All, January, February`.
pub fn title_case_list<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Capitalizes the first letter of every whitespace-separated word.
pub fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
