//! Paging through the raw rows of a filtered table.

use crate::prompt::{Prompter, SEPARATOR};
use bikeshare_analysis::TripTable;
use bikeshare_common::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Shows raw rows a page at a time for as long as the user answers `yes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDataPager {
    page_size: usize,
}

impl RawDataPager {
    /// Pager showing `page_size` rows per page.
    pub const fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    fn question(&self, first: bool) -> String {
        format!(
            "\nWould you like to see {} {}lines of raw data? Enter yes to continue or anything to stop.",
            self.page_size,
            if first { "" } else { "more " }
        )
    }

    /// Runs the pager over `table` and returns how many rows were shown.
    #[instrument(skip_all, fields(rows = table.len(), page_size = self.page_size))]
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        table: &TripTable,
    ) -> Result<usize> {
        let mut offset = 0;
        loop {
            if !prompter.confirm(&self.question(offset == 0))? {
                prompter.say("\nStopping...")?;
                break;
            }

            let page = table.page(offset, self.page_size);
            for record in page {
                prompter.say(table.render_row(record))?;
            }
            offset += page.len();

            if offset >= table.len() {
                prompter.say("\nNo more raw data to display.")?;
                break;
            }
        }
        prompter.say(SEPARATOR)?;
        debug!(shown = offset, "Pager finished");
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_analysis::read_trips;
    use bikeshare_common::test_utils::trip_fixtures::{CHICAGO_CSV, WASHINGTON_CSV};
    use bikeshare_common::City;
    use std::io::Cursor;

    fn run(page_size: usize, csv: &str, city: City, input: &str) -> (usize, String) {
        let table = read_trips(city, csv.as_bytes()).unwrap();
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let shown = RawDataPager::new(page_size).run(&mut prompter, &table).unwrap();
        (shown, String::from_utf8(prompter.into_inner().1).unwrap())
    }

    #[test]
    fn test_stops_on_anything_but_yes() {
        let (shown, out) = run(5, CHICAGO_CSV, City::Chicago, "no\n");
        assert_eq!(shown, 0);
        assert_eq!(
            out,
            "\nWould you like to see 5 lines of raw data? Enter yes to continue or anything to stop.\n\nStopping...\n----------------------------------------\n"
        );
    }

    #[test]
    fn test_pages_then_stops() {
        let (shown, out) = run(3, CHICAGO_CSV, City::Chicago, "yes\nYes\nnope\n");
        assert_eq!(shown, 6);
        assert!(out.contains("see 3 lines"));
        assert_eq!(out.matches("see 3 more lines").count(), 2);
        assert!(out.contains("      5  2017-03-07 17:45:00"));
        assert!(!out.contains("      6  2017-06-30"));
        assert!(out.ends_with("Stopping...\n----------------------------------------\n"));
    }

    #[test]
    fn test_stops_when_rows_run_out() {
        let (shown, out) = run(3, WASHINGTON_CSV, City::Washington, "yes\nyes\n");
        assert_eq!(shown, 4);
        assert!(out.ends_with("No more raw data to display.\n----------------------------------------\n"));
        assert!(!out.contains("Stopping..."));
    }

    #[test]
    fn test_empty_table() {
        let csv = ",Start Time,End Time,Start Station,End Station,User Type\n";
        let (shown, out) = run(5, csv, City::Washington, "yes\n");
        assert_eq!(shown, 0);
        assert!(out.contains("No more raw data to display."));
    }
}
