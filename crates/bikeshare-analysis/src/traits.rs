//! Statistic group trait definitions.

use crate::table::TripTable;
use std::fmt;

/// A read-only computation over a filtered trip table.
pub trait StatisticGroup {
    /// The printable result of the computation.
    type Output: fmt::Display;

    /// Computes the statistics; never modifies the table.
    fn compute(&self, table: &TripTable) -> Self::Output;

    /// Gets the name of this statistic group.
    fn name(&self) -> &'static str;

    /// Gets the console heading printed before the results.
    fn heading(&self) -> &'static str;
}

/// A statistic that may have had no rows to work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatOutcome<T> {
    /// The value computed from at least one row
    Computed(T),
    /// The filtered table had no usable rows
    NoData,
}

impl<T> StatOutcome<T> {
    /// The computed value, if any.
    pub fn computed(self) -> Option<T> {
        match self {
            Self::Computed(value) => Some(value),
            Self::NoData => None,
        }
    }

    /// Borrowing form of [`StatOutcome::computed`].
    pub const fn as_computed(&self) -> Option<&T> {
        match self {
            Self::Computed(value) => Some(value),
            Self::NoData => None,
        }
    }

    /// Whether there was nothing to compute from.
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

impl<T> From<Option<T>> for StatOutcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NoData, Self::Computed)
    }
}

impl<T: fmt::Display> fmt::Display for StatOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computed(value) => value.fmt(f),
            Self::NoData => f.write_str("No data available for the selected filters."),
        }
    }
}
