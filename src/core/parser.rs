//! Birth date entry validation
//!
//! Complete entries are parsed strictly and checked against today.
//! Anything shorter than a full MM/DD/YYYY is reported as incomplete
//! rather than invalid, so a date still being typed never surfaces an
//! error.

use chrono::NaiveDate;

use crate::consts::INPUT_LEN;
use crate::core::date::BirthDate;
use crate::error::ParseError;

/// Outcome of validating a possibly partial entry
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Validation {
    /// Complete and acceptable
    Valid(BirthDate),
    /// Too short to judge; keep typing
    Incomplete,
    /// Complete but not a usable birth date
    Invalid(ParseError),
}

/// Parse a complete entry, rejecting dates after `today`.
/// Equal to `today` is accepted (born today).
pub(crate) fn parse_input(input: &str, today: NaiveDate) -> Result<BirthDate, ParseError> {
    let birth: BirthDate = input.parse()?;
    if birth.date() > today {
        return Err(ParseError::FutureDate);
    }
    Ok(birth)
}

/// Validate a possibly partial entry without persisting anything.
pub(crate) fn validate_input(input: &str, today: NaiveDate) -> Validation {
    if input.chars().count() < INPUT_LEN {
        return Validation::Incomplete;
    }
    match parse_input(input, today) {
        Ok(birth) => Validation::Valid(birth),
        Err(e) => Validation::Invalid(e),
    }
}
