//! Total and mean trip duration.

use crate::table::TripTable;
use crate::traits::{StatOutcome, StatisticGroup};
use bikeshare_common::DurationParts;
use std::fmt;
use tracing::{debug, instrument};

const MILLIS_PER_SECOND: i64 = 1_000;

/// Summed and averaged travel time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    /// Sum over all rows, floored to whole seconds
    pub total: DurationParts,
    /// Arithmetic mean, floored to whole milliseconds and then whole seconds
    pub mean: DurationParts,
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The total travel time was: {}.", self.total)?;
        write!(f, "The mean travel time was: {}.", self.mean)
    }
}

/// Trip duration statistic group.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationStatsGroup;

impl StatisticGroup for DurationStatsGroup {
    type Output = StatOutcome<DurationStats>;

    #[instrument(skip_all, fields(rows = table.len()))]
    fn compute(&self, table: &TripTable) -> Self::Output {
        let Ok(rows) = i64::try_from(table.len()) else {
            return StatOutcome::NoData;
        };
        if rows == 0 {
            return StatOutcome::NoData;
        }

        let total_ms: i64 = table
            .records()
            .iter()
            .map(|record| record.duration().num_milliseconds())
            .sum();
        let mean_ms = total_ms.div_euclid(rows);

        let stats = DurationStats {
            total: DurationParts::from_seconds(total_ms.div_euclid(MILLIS_PER_SECOND)),
            mean: DurationParts::from_seconds(mean_ms.div_euclid(MILLIS_PER_SECOND)),
        };
        debug!(total_ms, mean_ms, "Computed duration statistics");
        StatOutcome::Computed(stats)
    }

    fn name(&self) -> &'static str {
        "duration_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating Trip Duration..."
    }
}
