//! # Bikeshare Analysis
//!
//! Trip dataset loading, filtering and descriptive statistics.
//!
//! A [`TripSource`] turns a city into a [`TripTable`] with the derived
//! month, weekday and start-hour columns. [`apply_filters`] narrows the
//! table in place, and [`AnalysisManager`] runs the four statistic groups
//! over it to build a [`TripReport`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod filter;
pub mod loader;
pub mod manager;
pub mod mode;
pub mod record;
pub mod table;
pub mod traits;

// Statistic groups
pub mod duration_stats;
pub mod station_stats;
pub mod time_stats;
pub mod user_stats;

pub use duration_stats::*;
pub use filter::*;
pub use loader::*;
pub use manager::*;
pub use mode::*;
pub use record::*;
pub use station_stats::*;
pub use table::*;
pub use time_stats::*;
pub use traits::*;
pub use user_stats::*;
