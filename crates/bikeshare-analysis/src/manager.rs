//! Analysis manager for orchestrating load, filter and statistics.

use crate::duration_stats::{DurationStats, DurationStatsGroup};
use crate::filter::{apply_filters, filters_for};
use crate::loader::TripSource;
use crate::station_stats::{StationStats, StationStatsGroup};
use crate::table::TripTable;
use crate::time_stats::{TimeStats, TimeStatsGroup};
use crate::traits::{StatOutcome, StatisticGroup};
use crate::user_stats::{UserStats, UserStatsGroup};
use bikeshare_common::{City, FilterCriteria, Result};
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Output of one statistic group and how long it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<T> {
    /// Console heading of the group
    pub heading: &'static str,
    /// Computed output
    pub output: T,
    /// Wall-clock computation time
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    fn run<G: StatisticGroup<Output = T>>(group: &G, table: &TripTable) -> Self {
        let started = Instant::now();
        let output = group.compute(table);
        let elapsed = started.elapsed();
        info!(group = group.name(), ?elapsed, "Statistic group computed");
        Self {
            heading: group.heading(),
            output,
            elapsed,
        }
    }
}

/// One printable section of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    /// Console heading
    pub heading: &'static str,
    /// Rendered results
    pub body: String,
    /// Wall-clock computation time
    pub elapsed: Duration,
}

/// All four statistic groups over one filtered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripReport {
    /// City analyzed
    pub city: City,
    /// Rows left after filtering
    pub rows: usize,
    /// Most frequent times of travel
    pub time: Timed<StatOutcome<TimeStats>>,
    /// Most popular stations and trip
    pub stations: Timed<StatOutcome<StationStats>>,
    /// Total and mean trip duration
    pub durations: Timed<StatOutcome<DurationStats>>,
    /// User types and demographics
    pub users: Timed<StatOutcome<UserStats>>,
}

impl TripReport {
    /// Runs every statistic group over `table`.
    #[instrument(skip_all, fields(city = %table.city(), rows = table.len()))]
    pub fn compute(table: &TripTable) -> Self {
        Self {
            city: table.city(),
            rows: table.len(),
            time: Timed::run(&TimeStatsGroup, table),
            stations: Timed::run(&StationStatsGroup, table),
            durations: Timed::run(&DurationStatsGroup, table),
            users: Timed::run(&UserStatsGroup, table),
        }
    }

    /// Sections in print order: time, stations, duration, users.
    pub fn sections(&self) -> [ReportSection; 4] {
        fn section<T: std::fmt::Display>(timed: &Timed<T>) -> ReportSection {
            ReportSection {
                heading: timed.heading,
                body: timed.output.to_string(),
                elapsed: timed.elapsed,
            }
        }
        [
            section(&self.time),
            section(&self.stations),
            section(&self.durations),
            section(&self.users),
        ]
    }
}

/// Loads, filters and analyzes trips from a [`TripSource`].
#[derive(Debug, Clone)]
pub struct AnalysisManager<S> {
    source: S,
}

impl<S: TripSource> AnalysisManager<S> {
    /// Creates a new analysis manager over `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads the city of `criteria` and applies its filters.
    #[instrument(skip(self), fields(criteria = %criteria))]
    pub fn load_filtered(&self, criteria: &FilterCriteria) -> Result<TripTable> {
        let mut table = self.source.load(criteria.city)?;
        apply_filters(&mut table, &filters_for(criteria));
        Ok(table)
    }

    /// Loads, filters and computes the full report in one step.
    pub fn analyze(&self, criteria: &FilterCriteria) -> Result<(TripTable, TripReport)> {
        let table = self.load_filtered(criteria)?;
        let report = TripReport::compute(&table);
        Ok((table, report))
    }
}
