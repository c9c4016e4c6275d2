//! The in-memory trip table for one city.

use crate::record::TripRecord;
use bikeshare_common::City;

/// All loaded (and possibly filtered) trips of one city.
///
/// Row order always matches the source file. Filtering removes rows but
/// never reorders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripTable {
    city: City,
    has_demographics: bool,
    records: Vec<TripRecord>,
}

impl TripTable {
    /// Creates a table from already parsed records.
    pub const fn new(city: City, has_demographics: bool, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            has_demographics,
            records,
        }
    }

    /// City the trips belong to.
    pub const fn city(&self) -> City {
        self.city
    }

    /// Whether the source had both `Gender` and `Birth Year` columns.
    pub const fn has_demographics(&self) -> bool {
        self.has_demographics
    }

    /// Rows in file order.
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no row is left.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Up to `len` rows starting at `offset`; empty past the end.
    pub fn page(&self, offset: usize, len: usize) -> &[TripRecord] {
        let start = offset.min(self.records.len());
        let end = offset.saturating_add(len).min(self.records.len());
        &self.records[start..end]
    }

    /// Keeps only the rows for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&TripRecord) -> bool) {
        self.records.retain(keep);
    }

    /// One human readable line for a raw row.
    pub fn render_row(&self, record: &TripRecord) -> String {
        let mut line = format!(
            "{:>7}  {}  {}  {} -> {}  {}",
            record.row_index,
            record.start_time,
            record.end_time,
            record.start_station,
            record.end_station,
            record.user_type
        );
        if self.has_demographics {
            let gender = record.gender.as_deref().unwrap_or("-");
            let birth_year = record
                .birth_year
                .map_or_else(|| "-".to_string(), |year| year.to_string());
            line.push_str(&format!("  {gender}  {birth_year}"));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_common::test_utils::mock_timestamp;

    fn table(rows: usize, has_demographics: bool) -> TripTable {
        let records = (0..rows)
            .map(|i| {
                let start = mock_timestamp(2017, 3, 1, 8, 0, 0);
                TripRecord::new(i, start, start, "A", "B", "Subscriber")
            })
            .collect();
        TripTable::new(City::Chicago, has_demographics, records)
    }

    #[test]
    fn test_page_clamps_to_table() {
        let table = table(7, true);
        assert_eq!(table.page(0, 5).len(), 5);
        assert_eq!(table.page(5, 5).len(), 2);
        assert_eq!(table.page(5, 5)[0].row_index, 5);
        assert!(table.page(10, 5).is_empty());
        assert_eq!(table.page(3, usize::MAX).len(), 4);
    }

    #[test]
    fn test_retain_keeps_order() {
        let mut table = table(6, true);
        table.retain(|record| record.row_index % 2 == 1);
        let kept: Vec<usize> = table.records().iter().map(|r| r.row_index).collect();
        assert_eq!(kept, vec![1, 3, 5]);
    }

    #[test]
    fn test_render_row_shows_demographics_only_when_present() {
        let with = table(1, true);
        let line = with.render_row(&with.records()[0]);
        assert!(line.ends_with("Subscriber  -  -"), "{line}");

        let without = table(1, false);
        let line = without.render_row(&without.records()[0]);
        assert!(line.ends_with("A -> B  Subscriber"), "{line}");
        assert!(line.contains("2017-03-01 08:00:00"));
    }
}
