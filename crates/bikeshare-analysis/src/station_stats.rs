//! Most popular stations and station pairs.

use crate::mode::mode;
use crate::table::TripTable;
use crate::traits::{StatOutcome, StatisticGroup};
use std::fmt;
use tracing::{debug, instrument};

/// Modal start station, end station and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    /// Most common start station
    pub start_station: String,
    /// Most common end station
    pub end_station: String,
    /// Most common `start -> end` pair
    pub trip: String,
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The most common Start Station was: {}.", self.start_station)?;
        writeln!(f, "The most common End Station was: {}.", self.end_station)?;
        write!(f, "The most common trip was: {}.", self.trip)
    }
}

/// Station popularity statistic group.
#[derive(Debug, Clone, Copy, Default)]
pub struct StationStatsGroup;

impl StatisticGroup for StationStatsGroup {
    type Output = StatOutcome<StationStats>;

    #[instrument(skip_all, fields(rows = table.len()))]
    fn compute(&self, table: &TripTable) -> Self::Output {
        let records = table.records();
        let start_station = mode(records.iter().map(|r| r.start_station.as_str()));
        let end_station = mode(records.iter().map(|r| r.end_station.as_str()));
        // Pairs are built per row here and never stored on the table
        let trip = mode(records.iter().map(crate::TripRecord::trip));

        let stats = match (start_station, end_station, trip) {
            (Some(start_station), Some(end_station), Some(trip)) => Some(StationStats {
                start_station: start_station.to_string(),
                end_station: end_station.to_string(),
                trip,
            }),
            _ => None,
        };
        debug!(?stats, "Computed station statistics");
        stats.into()
    }

    fn name(&self) -> &'static str {
        "station_stats"
    }

    fn heading(&self) -> &'static str {
        "Calculating The Most Popular Stations and Trip..."
    }
}
