//! Calendar-date value type
//!
//! A birth date is a plain (year, month, day) with no time-of-day or
//! timezone attached. Input, display, and storage all use the fixed
//! MM/DD/YYYY shape so the persisted value is byte-identical everywhere.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{DATE_FORMAT, INPUT_LEN};
use crate::error::ParseError;

/// A validated birth date. Calendar validity (month range, day range,
/// leap years) is enforced at construction and never re-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BirthDate(NaiveDate);

impl BirthDate {
    /// Wrap an already-validated calendar date
    #[cfg(test)]
    pub(crate) fn new(date: NaiveDate) -> Self {
        BirthDate(date)
    }

    pub(crate) fn date(self) -> NaiveDate {
        self.0
    }

    pub(crate) fn year(self) -> i32 {
        self.0.year()
    }

    pub(crate) fn month(self) -> u32 {
        self.0.month()
    }

    pub(crate) fn day(self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for BirthDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mdy(s).map(BirthDate)
    }
}

impl Serialize for BirthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a date strictly as MM/DD/YYYY.
///
/// chrono accepts unpadded fields for %m/%d, so the literal shape is
/// checked first; chrono then rejects impossible dates (month 13,
/// Feb 30, Feb 29 outside leap years).
pub(crate) fn parse_mdy(s: &str) -> Result<NaiveDate, ParseError> {
    if !has_mdy_shape(s) {
        return Err(ParseError::InvalidFormat);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ParseError::InvalidFormat)
}

/// Format a date as MM/DD/YYYY.
pub(crate) fn format_mdy(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Literal MM/DD/YYYY shape: digits in the digit positions, slashes at
/// 2 and 5, nothing more.
fn has_mdy_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == INPUT_LEN
        && b.iter().enumerate().all(|(i, c)| match i {
            2 | 5 => *c == b'/',
            _ => c.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_date() {
        let birth: BirthDate = "06/15/1990".parse().unwrap();
        assert_eq!(birth.month(), 6);
        assert_eq!(birth.day(), 15);
        assert_eq!(birth.year(), 1990);
    }

    #[test]
    fn display_round_trips() {
        let birth: BirthDate = "06/15/1990".parse().unwrap();
        assert_eq!(birth.to_string(), "06/15/1990");
        assert_eq!(birth.to_string().parse::<BirthDate>().unwrap(), birth);
    }

    #[test]
    fn rejects_unpadded_fields() {
        assert_eq!(
            "6/15/1990".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat)
        );
        assert_eq!(
            "06/5/1990".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat)
        );
    }

    #[test]
    fn rejects_wrong_separators() {
        assert_eq!(
            "06-15-1990".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat)
        );
        assert_eq!(
            "1990/06/15".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat)
        );
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            "13/40/2020".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat)
        );
        assert_eq!(
            "02/30/2020".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat)
        );
        assert_eq!(
            "00/10/2020".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat)
        );
    }

    #[test]
    fn leap_day_valid_only_in_leap_years() {
        assert!("02/29/2000".parse::<BirthDate>().is_ok());
        assert_eq!(
            "02/29/2023".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat)
        );
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert_eq!(
            "06/15/1990x".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat)
        );
        assert_eq!(
            "06/15/1990 ".parse::<BirthDate>(),
            Err(ParseError::InvalidFormat)
        );
    }

    #[test]
    fn serde_uses_formatted_string() {
        let birth: BirthDate = "02/29/2000".parse().unwrap();
        let json = serde_json::to_string(&birth).unwrap();
        assert_eq!(json, r#""02/29/2000""#);
        let back: BirthDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birth);
    }

    #[test]
    fn serde_rejects_malformed_string() {
        assert!(serde_json::from_str::<BirthDate>(r#""1990-06-15""#).is_err());
    }

    #[test]
    fn format_mdy_pads_fields() {
        let d = NaiveDate::from_ymd_opt(1990, 6, 5).unwrap();
        assert_eq!(format_mdy(d), "06/05/1990");
    }
}
