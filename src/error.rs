use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::consts::DATE_FORMAT;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("Invalid date format (MM/DD/YYYY)")]
    InvalidFormat,

    #[error("Date cannot be in the future")]
    FutureDate,
}

#[derive(Debug, Error)]
pub(crate) enum AgeError {
    #[error(
        "Stored birth date {} is after today ({})",
        birth.format(DATE_FORMAT),
        today.format(DATE_FORMAT)
    )]
    BirthAfterToday { birth: NaiveDate, today: NaiveDate },
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("Could not determine a directory for the birth date file")]
    NoHome,

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode birth date: {0}")]
    Encode(#[from] toml::ser::Error),
}
