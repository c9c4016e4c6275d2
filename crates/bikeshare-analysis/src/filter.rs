//! Row predicates derived from the resolved filter criteria.

use crate::record::TripRecord;
use crate::table::TripTable;
use bikeshare_common::FilterCriteria;
use tracing::{debug, instrument};

/// A single equality test on a derived time column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripFilter {
    /// Calendar month, 1-12
    Month(u32),
    /// Weekday, Monday = 0
    DayOfWeek(u32),
    /// Start hour, 0-23
    Hour(u32),
}

impl TripFilter {
    /// Whether `record` passes this filter.
    pub const fn matches(self, record: &TripRecord) -> bool {
        match self {
            Self::Month(month) => record.month == month,
            Self::DayOfWeek(day) => record.day_of_week == day,
            Self::Hour(hour) => record.start_hour == hour,
        }
    }
}

/// Filters for every criterion other than `all`, in month, day, hour order.
pub fn filters_for(criteria: &FilterCriteria) -> Vec<TripFilter> {
    [
        criteria.month.month_number().map(TripFilter::Month),
        criteria.day.day_index().map(TripFilter::DayOfWeek),
        criteria.hour.hour().map(TripFilter::Hour),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Drops every row that fails any of `filters`. Row order is kept.
#[instrument(skip(table), fields(city = %table.city()))]
pub fn apply_filters(table: &mut TripTable, filters: &[TripFilter]) {
    let before = table.len();
    table.retain(|record| filters.iter().all(|filter| filter.matches(record)));
    debug!(before, after = table.len(), "Filters applied");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_common::{City, DayFilter, HourFilter, MonthFilter};
    use chrono::{Month, Weekday};

    #[test]
    fn test_all_criteria_produce_no_filters() {
        assert!(filters_for(&FilterCriteria::unfiltered(City::Chicago)).is_empty());
    }

    #[test]
    fn test_criteria_map_to_indices() {
        let criteria = FilterCriteria {
            city: City::Chicago,
            month: MonthFilter::Month(Month::March),
            day: DayFilter::Day(Weekday::Sun),
            hour: HourFilter::Hour(0),
        };
        assert_eq!(
            filters_for(&criteria),
            vec![
                TripFilter::Month(3),
                TripFilter::DayOfWeek(6),
                TripFilter::Hour(0)
            ]
        );
    }
}
