//! Most frequent times of travel.

use crate::mode::mode;
use crate::table::TripTable;
use crate::traits::{StatOutcome, StatisticGroup};
use bikeshare_common::{month_name, weekday_name};
use std::fmt;
use tracing::{debug, instrument};

/// Modal month, weekday and start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// Most common calendar month, 1-12
    pub month: u32,
    /// Most common weekday, Monday = 0
    pub day_of_week: u32,
    /// Most common start hour, 0-23
    pub start_hour: u32,
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The most common month was: {}.",
            month_name(self.month).unwrap_or("Unknown")
        )?;
        writeln!(
            f,
            "The most common day of week was: {}.",
            weekday_name(self.day_of_week).unwrap_or("Unknown")
        )?;
        write!(f, "The most common start hour was: {}", self.start_hour)
    }
}

/// Time-of-travel statistic group.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeStatsGroup;

impl StatisticGroup for TimeStatsGroup {
    type Output = StatOutcome<TimeStats>;

    #[instrument(skip_all, fields(rows = table.len()))]
    fn compute(&self, table: &TripTable) -> Self::Output {
        let records = table.records();
        let stats = mode(records.iter().map(|r| r.month))
            .zip(mode(records.iter().map(|r| r.day_of_week)))
            .zip(mode(records.iter().map(|r| r.start_hour)))
            .map(|((month, day_of_week), start_hour)| TimeStats {
                month,
                day_of_week,
                start_hour,
            });
        debug!(?stats, "Computed time statistics");
        stats.into()
    }

    fn name(&self) -> &'static str {
        "time_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating The Most Frequent Times of Travel..."
    }
}
