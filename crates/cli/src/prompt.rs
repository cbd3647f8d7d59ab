//! Line-oriented prompts with parse-and-retry loops.
//!
//! Every `read_*` helper keeps asking until it gets an acceptable value, so
//! the only way out is a value or a [`PromptError`].

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use menagerie_domain::common::{format_date, parse_date};
use menagerie_domain::{DomainError, MagicType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input stream closed while waiting for an answer
    #[error("end of input")]
    EndOfInput,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl Display) -> PromptResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Read a line with surrounding whitespace removed.
    pub fn read_string(&mut self, prompt: &str) -> PromptResult<String> {
        self.read_line(prompt)
    }

    fn read_parsed<T: FromStr>(&mut self, prompt: &str, error_message: &str) -> PromptResult<T> {
        loop {
            let raw = self.read_line(prompt)?;
            match raw.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!(input = %raw, "Rejected unparseable input");
                    self.say(error_message)?;
                }
            }
        }
    }

    pub fn read_integer(&mut self, prompt: &str, error_message: &str) -> PromptResult<i32> {
        self.read_parsed(prompt, error_message)
    }

    pub fn read_positive_integer(
        &mut self,
        prompt: &str,
        error_message: &str,
    ) -> PromptResult<usize> {
        loop {
            let value = self.read_integer(prompt, error_message)?;
            match usize::try_from(value) {
                Ok(n) if n > 0 => return Ok(n),
                _ => self.say(error_message)?,
            }
        }
    }

    pub fn read_integer_in_range(&mut self, prompt: &str, min: i32, max: i32) -> PromptResult<i32> {
        loop {
            let value = self.read_integer(prompt, "Invalid input!")?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            self.say(format!("Value must be between {min} and {max}."))?;
        }
    }

    pub fn read_float(&mut self, prompt: &str, error_message: &str) -> PromptResult<f64> {
        self.read_parsed(prompt, error_message)
    }

    pub fn read_float_in_range(&mut self, prompt: &str, min: f64, max: f64) -> PromptResult<f64> {
        loop {
            let value = self.read_float(prompt, "Invalid input!")?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            self.say(format!("Value must be between {min} and {max}."))?;
        }
    }

    pub fn read_date(&mut self, prompt: &str) -> PromptResult<NaiveDate> {
        loop {
            let raw = self.read_line(prompt)?;
            match parse_date(&raw) {
                Ok(date) => return Ok(date),
                Err(e) => {
                    tracing::debug!(input = %raw, error = %e, "Rejected date");
                    self.say("Invalid date format! Use dd.MM.yyyy")?;
                }
            }
        }
    }

    pub fn read_date_in_range(
        &mut self,
        prompt: &str,
        min: NaiveDate,
        max: NaiveDate,
    ) -> PromptResult<NaiveDate> {
        loop {
            let date = self.read_date(prompt)?;
            if (min..=max).contains(&date) {
                return Ok(date);
            }
            self.say(format!(
                "Date must be between {} and {}.",
                format_date(min),
                format_date(max)
            ))?;
        }
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> PromptResult<bool> {
        loop {
            let answer = self.read_line(prompt)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please enter 'y' for yes or 'n' for no.")?,
            }
        }
    }

    /// List every magic type with its number, then accept a number or name.
    pub fn read_magic_type(&mut self, prompt: &str) -> PromptResult<MagicType> {
        loop {
            self.say("Available magic types: ")?;
            for magic_type in MagicType::all() {
                self.say(format!("- {} ({})", magic_type, magic_type.index()))?;
            }

            let raw = self.read_line(prompt)?;
            match raw.parse::<MagicType>() {
                Ok(magic_type) => return Ok(magic_type),
                Err(_) => self.say("Invalid magic type! Please enter a valid number.")?,
            }
        }
    }

    /// Retry until `validate` accepts the entered text.
    pub fn read_validated<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(String) -> Result<T, DomainError>,
    ) -> PromptResult<T> {
        loop {
            let raw = self.read_line(prompt)?;
            match validate(raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(field = ?e.field(), "Rejected value");
                    self.say(format!("Error: {}", e.message()))?;
                }
            }
        }
    }
}
