//! Common utility functions shared by the domain and its callers.
//!
//! Pure functions only: no side effects, no I/O.

pub mod datetime;
pub mod string;

pub use datetime::{format_date, parse_date, DATE_FORMAT, ISO_DATE_FORMAT};
pub use string::{contains_ignore_case, eq_ignore_case};
