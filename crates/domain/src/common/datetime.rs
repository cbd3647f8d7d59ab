//! Date parsing and formatting with a day-first default.

use chrono::NaiveDate;

/// Day-first format used for display and preferred for input (`dd.MM.yyyy`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// ISO 8601 calendar date, accepted as an alternative input format.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a calendar date written as `dd.MM.yyyy` or `yyyy-mm-dd`.
///
/// # Examples
///
/// ```
/// use menagerie_domain::common::parse_date;
/// use chrono::Datelike;
///
/// let date = parse_date("15.01.2024").unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(parse_date("2024-01-15").unwrap(), date);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string matches neither format. The
/// error from the day-first attempt is reported.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|err| NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|_| err))
}

/// Formats a date as `dd.MM.yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
