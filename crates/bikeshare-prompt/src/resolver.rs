//! Interactive resolution of the filter criteria.

use crate::prompt::{Prompter, SEPARATOR};
use bikeshare_common::{
    title_case_list, City, DayFilter, FilterCriteria, HourFilter, MonthFilter, Result,
    FILTER_DAYS, FILTER_MONTHS,
};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Printed once at the start of every session iteration.
pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

/// Printed after an unknown city.
pub const INVALID_CITY: &str = "Invalid city, please try again.";

/// Printed after any other rejected answer.
pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";

/// Asks for city, month, day and hour until each one is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResolver {
    city_question: String,
    month_question: String,
    day_question: String,
    hour_question: String,
}

impl Default for FilterResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterResolver {
    /// Builds the questions from the supported cities, months and days.
    pub fn new() -> Self {
        Self {
            city_question: format!(
                "Which city would you like to analyze? Valid choices include: {}.",
                title_case_list(City::ALL.iter().map(|city| city.key()))
            ),
            month_question: format!(
                "Which month would you like to analyze? Valid choices include: {}.",
                with_all(FILTER_MONTHS.iter().map(|(name, _)| *name))
            ),
            day_question: format!(
                "Which day would you like to analyze? Valid choices include: {}.",
                with_all(FILTER_DAYS.iter().map(|(name, _)| *name))
            ),
            hour_question:
                "Which start hour would you like to analyze? Valid choices range from [0 to 23] or All."
                    .to_string(),
        }
    }

    /// Greets, then asks each question until its answer is valid.
    ///
    /// Never returns an out-of-domain value. The only failure modes are I/O
    /// errors and [`bikeshare_common::BikeshareError::InputClosed`].
    #[instrument(skip_all)]
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<FilterCriteria> {
        prompter.say(GREETING)?;

        let city = prompter.ask_until(&self.city_question, INVALID_CITY, str::parse::<City>)?;
        let month =
            prompter.ask_until(&self.month_question, INVALID_CHOICE, str::parse::<MonthFilter>)?;
        let day = prompter.ask_until(&self.day_question, INVALID_CHOICE, str::parse::<DayFilter>)?;
        let hour =
            prompter.ask_until(&self.hour_question, INVALID_CHOICE, str::parse::<HourFilter>)?;
        prompter.say(SEPARATOR)?;

        let criteria = FilterCriteria {
            city,
            month,
            day,
            hour,
        };
        info!(%criteria, "Filters resolved");
        Ok(criteria)
    }
}

fn with_all(names: impl Iterator<Item = &'static str>) -> String {
    title_case_list(std::iter::once("all").chain(names))
}
