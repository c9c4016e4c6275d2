//! Line-oriented question and answer over arbitrary streams.

use bikeshare_common::{BikeshareError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Horizontal rule printed between sections.
pub const SEPARATOR: &str = "----------------------------------------";

const AFFIRMATIVE: &str = "yes";

/// Asks questions on `output` and reads answers from `input`, one per line.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `question` and returns the trimmed answer.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    /// Fails with [`BikeshareError::InputClosed`] at end of input.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and then fail validation
        let mut answer = Vec::new();
        if self.input.read_until(b'\n', &mut answer)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&answer).trim().to_string())
    }

    /// Re-asks `question` until `parse` accepts the answer.
    ///
    /// Every rejected answer prints `invalid` before the question is repeated.
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(%answer, error = %e, "Rejected answer");
                    self.say(invalid)?;
                }
            }
        }
    }

    /// Whether the answer to `question` is `yes`, in any letter case.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self.ask(question)?.eq_ignore_ascii_case(AFFIRMATIVE))
    }
}
