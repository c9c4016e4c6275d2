//! Test utilities and shared test helpers for the bikeshare explorer.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Test fixture for creating a naive timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .expect("Invalid mock timestamp")
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Synthetic city datasets in the on-disk CSV layout.
pub mod trip_fixtures {
    use super::{Path, PathBuf};

    /// Station names used by the Chicago fixture, in ascending order.
    pub const CLARK_AND_ELM: &str = "Clark St & Elm St";
    /// Second Chicago station.
    pub const LAKE_SHORE_AND_MONROE: &str = "Lake Shore Dr & Monroe St";
    /// Third Chicago station.
    pub const STREETER_AND_GRAND: &str = "Streeter Dr & Grand Ave";

    /// Ten Chicago trips with demographics.
    ///
    /// Row 5 has blank gender and birth year cells. Row 9 spans exactly
    /// 90061 seconds. Row 6 starts in June and ends in July.
    pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-01-01 00:07:57,2017-01-01 00:20:53,776,Clark St & Elm St,Streeter Dr & Grand Ave,Subscriber,Male,1990.0
955915,2017-01-02 08:00:00,2017-01-02 08:10:00,600,Clark St & Elm St,Streeter Dr & Grand Ave,Subscriber,Female,1985.0
9031,2017-01-02 08:30:00,2017-01-02 08:45:00,900,Streeter Dr & Grand Ave,Lake Shore Dr & Monroe St,Customer,Male,1990.0
304487,2017-02-06 17:00:00,2017-02-06 17:20:00,1200,Clark St & Elm St,Lake Shore Dr & Monroe St,Subscriber,Male,1975.0
45207,2017-03-07 08:15:00,2017-03-07 08:25:00,600,Lake Shore Dr & Monroe St,Clark St & Elm St,Subscriber,Female,2000.0
1473887,2017-03-07 17:45:00,2017-03-07 18:05:00,1200,Clark St & Elm St,Streeter Dr & Grand Ave,Customer,,
961916,2017-06-30 23:50:00,2017-07-01 00:10:00,1200,Streeter Dr & Grand Ave,Clark St & Elm St,Subscriber,Male,1990.0
65924,2017-01-08 12:00:00,2017-01-08 12:30:00,1800,Lake Shore Dr & Monroe St,Streeter Dr & Grand Ave,Subscriber,Female,1985.0
606841,2017-04-03 08:05:00,2017-04-03 08:20:00,900,Clark St & Elm St,Streeter Dr & Grand Ave,Dependent,Male,1990.0
135470,2017-05-15 09:00:00,2017-05-16 10:01:01,90061,Streeter Dr & Grand Ave,Lake Shore Dr & Monroe St,Subscriber,Female,1985.0
";

    /// Four Washington trips; the file has no Gender or Birth Year columns.
    pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Subscriber
665458,2017-04-02 07:48:35,2017-04-02 08:19:03,1827.341,Constitution Ave & 2nd St NW/DOL,Henry Bacon Dr & Lincoln Memorial Circle NW,Customer
";

    /// Same layout as Chicago but with an unparseable start time on line 3 of the file.
    pub const CORRUPT_CSV: &str = "\
,Start Time,End Time,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-01 00:07:57,2017-01-01 00:20:53,A,B,Subscriber,Male,1990
1,yesterday-ish,2017-01-02 08:10:00,A,B,Subscriber,Female,1985
";

    /// Hand-computed statistics over the full [`CHICAGO_CSV`] table.
    pub mod chicago_expectations {
        /// Row count
        pub const ROWS: usize = 10;
        /// January has 4 of the 10 trips
        pub const POPULAR_MONTH: u32 = 1;
        /// Monday (index 0) has 5 trips
        pub const POPULAR_DAY: u32 = 0;
        /// 08:00-08:59 has 4 trips
        pub const POPULAR_HOUR: u32 = 8;
        /// Sum of all durations
        pub const TOTAL_SECONDS: i64 = 99_237;
        /// Floor of the mean duration
        pub const MEAN_SECONDS: i64 = 9_923;
        /// Counts per user type, most frequent first
        pub const USER_TYPES: [(&str, usize); 3] =
            [("Subscriber", 7), ("Customer", 2), ("Dependent", 1)];
        /// Counts per gender (the blank cell is excluded)
        pub const GENDERS: [(&str, usize); 2] = [("Male", 5), ("Female", 4)];
        /// Minimum birth year
        pub const OLDEST_BIRTH_YEAR: i32 = 1975;
        /// Maximum birth year
        pub const YOUNGEST_BIRTH_YEAR: i32 = 2000;
        /// Most frequent birth year
        pub const MODAL_BIRTH_YEAR: i32 = 1990;
        /// Rows matching month=january, day=monday
        pub const JANUARY_MONDAY_ROWS: usize = 2;
        /// Rows matching hour=8
        pub const HOUR_EIGHT_ROWS: usize = 4;
    }

    /// Writes `contents` to `file_name` inside `dir` and returns the path.
    pub fn write_dataset(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, contents).expect("Failed to write dataset fixture");
        path
    }
}

/// Property-based testing utilities using proptest.
pub mod property_testing {
    use crate::{City, DayFilter, FilterCriteria, HourFilter, MonthFilter, FILTER_DAYS, FILTER_MONTHS};
    use proptest::prelude::*;

    /// Strategy for generating cities.
    pub fn city_strategy() -> impl Strategy<Value = City> {
        prop::sample::select(City::ALL.to_vec())
    }

    /// Strategy for generating month filters, `All` included.
    pub fn month_filter_strategy() -> impl Strategy<Value = MonthFilter> {
        prop_oneof![
            Just(MonthFilter::All),
            prop::sample::select(FILTER_MONTHS.to_vec()).prop_map(|(_, month)| MonthFilter::Month(month)),
        ]
    }

    /// Strategy for generating day filters, `All` included.
    pub fn day_filter_strategy() -> impl Strategy<Value = DayFilter> {
        prop_oneof![
            Just(DayFilter::All),
            prop::sample::select(FILTER_DAYS.to_vec()).prop_map(|(_, weekday)| DayFilter::Day(weekday)),
        ]
    }

    /// Strategy for generating hour filters, `All` included.
    pub fn hour_filter_strategy() -> impl Strategy<Value = HourFilter> {
        prop_oneof![Just(HourFilter::All), (0u8..24).prop_map(HourFilter::Hour)]
    }

    /// Strategy for generating complete filter criteria.
    pub fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
        (
            city_strategy(),
            month_filter_strategy(),
            day_filter_strategy(),
            hour_filter_strategy(),
        )
            .prop_map(|(city, month, day, hour)| FilterCriteria {
                city,
                month,
                day,
                hour,
            })
    }

    /// Strategy that re-cases every letter of `word` at random.
    pub fn random_case(word: &'static str) -> impl Strategy<Value = String> {
        prop::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
            word.chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect()
        })
    }
}
