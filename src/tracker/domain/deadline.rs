//! Calendar deadline attached to a task.

use super::ParseDeadlineError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format accepted for deadline input and used for display.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// A task due date without a time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(NaiveDate);

impl Deadline {
    /// Parses a deadline in `YYYY-MM-DD` form.
    ///
    /// The year must be exactly four digits with no sign.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDeadlineError`] when the value is not a valid calendar
    /// date in the expected format.
    pub fn parse(value: &str) -> Result<Self, ParseDeadlineError> {
        let trimmed = value.trim();
        if !starts_with_plain_year(trimmed) {
            return Err(ParseDeadlineError(value.to_owned()));
        }
        NaiveDate::parse_from_str(trimmed, DEADLINE_FORMAT)
            .map(Self)
            .map_err(|_| ParseDeadlineError(value.to_owned()))
    }
}

/// `%Y` alone also accepts signed and longer years.
fn starts_with_plain_year(value: &str) -> bool {
    let mut bytes = value.bytes();
    let year_digits = bytes.by_ref().take(4).filter(u8::is_ascii_digit).count();
    year_digits == 4 && bytes.next() == Some(b'-')
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DEADLINE_FORMAT))
    }
}
