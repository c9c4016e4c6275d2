//! Domain types for the filter criteria and their validation.
//!
//! Every filter value is parsed case-insensitively from user input. The
//! `FromStr` implementations are the single source of truth for what the
//! interactive resolver accepts, so they stay free of any I/O.

use crate::error::BikeshareError;
use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A city with a bikeshare dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    /// Chicago (has demographics)
    Chicago,
    /// New York City (has demographics)
    NewYorkCity,
    /// Washington (no gender or birth year columns)
    Washington,
}

impl City {
    /// All supported cities in prompt order.
    pub const ALL: [Self; 3] = [Self::Chicago, Self::NewYorkCity, Self::Washington];

    /// Canonical lowercase key, as typed at the prompt.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }

    /// Title-cased name for display.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        }
    }

    /// File name of the dataset shipped for this city.
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', " ");
        Self::ALL
            .into_iter()
            .find(|city| city.key() == normalized)
            .ok_or_else(|| BikeshareError::validation_field(format!("unknown city '{}'", s.trim()), "city"))
    }
}

/// Months covered by the datasets, in calendar order.
pub const FILTER_MONTHS: [(&str, Month); 6] = [
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
];

/// Weekdays, Monday first.
pub const FILTER_DAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

const ALL_KEYWORD: &str = "all";

/// Month restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    /// No month restriction
    All,
    /// Only trips starting in this month (January through June)
    Month(Month),
}

impl MonthFilter {
    /// 1-based calendar month to keep, if any.
    pub fn month_number(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Month(month) => Some(month.number_from_month()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == ALL_KEYWORD {
            return Ok(Self::All);
        }
        FILTER_MONTHS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, month)| Self::Month(*month))
            .ok_or_else(|| BikeshareError::validation_field(format!("unknown month '{}'", s.trim()), "month"))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_KEYWORD),
            Self::Month(month) => f.write_str(&month.name().to_lowercase()),
        }
    }
}

/// Day-of-week restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    /// No day restriction
    All,
    /// Only trips starting on this weekday
    Day(Weekday),
}

impl DayFilter {
    /// Monday-based index (Monday = 0) to keep, if any.
    pub fn day_index(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Day(weekday) => Some(weekday.num_days_from_monday()),
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == ALL_KEYWORD {
            return Ok(Self::All);
        }
        FILTER_DAYS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, weekday)| Self::Day(*weekday))
            .ok_or_else(|| BikeshareError::validation_field(format!("unknown day '{}'", s.trim()), "day"))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_KEYWORD),
            Self::Day(weekday) => {
                let name = FILTER_DAYS[weekday.num_days_from_monday() as usize].0;
                f.write_str(name)
            }
        }
    }
}

/// Start-hour restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourFilter {
    /// No hour restriction
    All,
    /// Only trips starting in this hour (0-23)
    Hour(u8),
}

impl HourFilter {
    /// Hour to keep, if any.
    pub fn hour(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Hour(hour) => Some(u32::from(hour)),
        }
    }
}

impl FromStr for HourFilter {
    type Err = BikeshareError;

    /// Integers are tried first; only when that fails is the literal `all` accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(hour) => u8::try_from(hour)
                .ok()
                .filter(|hour| *hour < 24)
                .map(Self::Hour)
                .ok_or_else(|| {
                    BikeshareError::validation_field(format!("hour {hour} is outside 0-23"), "hour")
                }),
            Err(_) if trimmed.eq_ignore_ascii_case(ALL_KEYWORD) => Ok(Self::All),
            Err(_) => Err(BikeshareError::validation_field(
                format!("'{trimmed}' is neither an hour nor 'all'"),
                "hour",
            )),
        }
    }
}

impl fmt::Display for HourFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_KEYWORD),
            Self::Hour(hour) => write!(f, "{hour}"),
        }
    }
}

/// Fully resolved filter criteria for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Dataset to analyze
    pub city: City,
    /// Month restriction
    pub month: MonthFilter,
    /// Day-of-week restriction
    pub day: DayFilter,
    /// Start-hour restriction
    pub hour: HourFilter,
}

impl FilterCriteria {
    /// Criteria that keep every row of the given city.
    pub const fn unfiltered(city: City) -> Self {
        Self {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
            hour: HourFilter::All,
        }
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={} month={} day={} hour={}",
            self.city.key(),
            self.month,
            self.day,
            self.hour
        )
    }
}
