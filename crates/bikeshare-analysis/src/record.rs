//! A single trip row with its derived time columns.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};

/// One trip, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRecord {
    /// 0-based position of the row in the unfiltered file
    pub row_index: usize,
    /// When the trip started
    pub start_time: NaiveDateTime,
    /// When the trip ended
    pub end_time: NaiveDateTime,
    /// Station the trip started from
    pub start_station: String,
    /// Station the trip ended at
    pub end_station: String,
    /// Rider category, e.g. `Subscriber`
    pub user_type: String,
    /// Rider gender; `None` for blank cells or datasets without demographics
    pub gender: Option<String>,
    /// Rider birth year; `None` for blank cells or datasets without demographics
    pub birth_year: Option<i32>,
    /// Calendar month of `start_time`, 1-12
    pub month: u32,
    /// Weekday of `start_time`, Monday = 0
    pub day_of_week: u32,
    /// Hour of `start_time`, 0-23
    pub start_hour: u32,
}

impl TripRecord {
    /// Builds a record and derives its time columns from `start_time`.
    pub fn new(
        row_index: usize,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        user_type: impl Into<String>,
    ) -> Self {
        Self {
            row_index,
            start_time,
            end_time,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: user_type.into(),
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday().num_days_from_monday(),
            start_hour: start_time.hour(),
        }
    }

    /// Attaches the optional demographic cells.
    #[must_use]
    pub fn with_demographics(mut self, gender: Option<String>, birth_year: Option<i32>) -> Self {
        self.gender = gender;
        self.birth_year = birth_year;
        self
    }

    /// The `start -> end` station pair.
    pub fn trip(&self) -> String {
        format!("{} -> {}", self.start_station, self.end_station)
    }

    /// Elapsed time between start and end. Negative for malformed rows.
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_common::test_utils::mock_timestamp;

    #[test]
    fn test_derived_fields_match_calendar() {
        let record = TripRecord::new(
            0,
            mock_timestamp(2017, 1, 1, 0, 0, 0),
            mock_timestamp(2017, 1, 1, 0, 10, 0),
            "A",
            "B",
            "Subscriber",
        );
        assert_eq!(record.month, 1);
        // 2017-01-01 was a Sunday
        assert_eq!(record.day_of_week, 6);
        assert_eq!(record.start_hour, 0);
        assert_eq!(record.duration(), TimeDelta::minutes(10));
        assert_eq!(record.trip(), "A -> B");
    }

    #[test]
    fn test_demographics_default_to_missing() {
        let start = mock_timestamp(2017, 6, 30, 23, 50, 0);
        let record = TripRecord::new(7, start, start, "A", "A", "Customer");
        assert!(record.gender.is_none());
        assert!(record.birth_year.is_none());

        let record = record.with_demographics(Some("Female".to_string()), Some(1985));
        assert_eq!(record.gender.as_deref(), Some("Female"));
        assert_eq!(record.birth_year, Some(1985));
        assert_eq!(record.day_of_week, 4);
    }
}
