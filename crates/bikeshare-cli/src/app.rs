//! The restartable interactive session.

use crate::error::AppResult;
use bikeshare_analysis::{AnalysisManager, TripReport, TripSource};
use bikeshare_common::{BikeshareError, Result};
use bikeshare_config::DisplayConfig;
use bikeshare_prompt::{FilterResolver, Prompter, RawDataPager, SEPARATOR};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

const RESTART_QUESTION: &str =
    "\nWould you like to restart? Enter yes to continue or anything to exit.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user declined to restart
    Declined,
    /// Input ended while a question was open
    InputClosed,
}

/// One interactive explorer session over a dataset source.
#[derive(Debug, Clone)]
pub struct App<S> {
    manager: AnalysisManager<S>,
    resolver: FilterResolver,
    pager: RawDataPager,
    show_timing: bool,
}

impl<S: TripSource> App<S> {
    /// Creates the session with the given display settings.
    pub fn new(source: S, display: &DisplayConfig) -> Self {
        Self {
            manager: AnalysisManager::new(source),
            resolver: FilterResolver::new(),
            pager: RawDataPager::new(display.page_size),
            show_timing: display.show_timing,
        }
    }

    /// Runs iterations until the user declines to restart or input ends.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> AppResult<SessionEnd> {
        let mut prompter = Prompter::new(input, output);
        let mut iterations = 0_usize;
        loop {
            iterations += 1;
            match self.iteration(&mut prompter) {
                Ok(true) => {}
                Ok(false) => {
                    info!(iterations, "Session finished");
                    return Ok(SessionEnd::Declined);
                }
                Err(BikeshareError::InputClosed) => {
                    info!(iterations, "Input closed, ending session");
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// One pass of resolve, analyze, page and restart prompt.
    fn iteration<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<bool> {
        let criteria = self.resolver.resolve(prompter)?;
        let (table, report) = self.manager.analyze(&criteria)?;
        self.print_report(prompter, &report)?;
        self.pager.run(prompter, &table)?;

        let restart = prompter.confirm(RESTART_QUESTION)?;
        if !restart {
            prompter.say("\nGoodbye!")?;
        }
        Ok(restart)
    }

    fn print_report<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        report: &TripReport,
    ) -> Result<()> {
        for section in report.sections() {
            prompter.say(format_args!("\n{}\n", section.heading))?;
            prompter.say(&section.body)?;
            if self.show_timing {
                prompter.say(format_args!(
                    "\nThis took {} seconds.",
                    section.elapsed.as_secs_f64()
                ))?;
            }
            prompter.say(SEPARATOR)?;
        }
        Ok(())
    }
}
