//! Clock port - the source of "today" for date validation.

use chrono::{Local, NaiveDate};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort {
    fn today(&self) -> NaiveDate;
}

/// System clock - uses the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
