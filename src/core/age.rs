//! Age and next-birthday arithmetic
//!
//! Pure calendar math over a (birth date, today) pair. The countdown to
//! the next birthday uses a flat 30-day month bucket: it is a measure of
//! distance, not a calendar-month walk, so every "month" is 30 days and
//! the remainder is days.

use chrono::{Datelike, NaiveDate};

use crate::core::date::BirthDate;
use crate::error::AgeError;

/// Derived metrics for one (birth date, today) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AgeReport {
    pub(crate) years: i32,
    pub(crate) months_until_birthday: i64,
    pub(crate) days_until_birthday: i64,
    pub(crate) is_birthday_today: bool,
}

/// Compute the full report. Total for any birth <= today; a later birth
/// date (possible via a hand-edited slot file) fails instead of
/// producing a negative age.
pub(crate) fn evaluate(birth: BirthDate, today: NaiveDate) -> Result<AgeReport, AgeError> {
    if birth.date() > today {
        return Err(AgeError::BirthAfterToday {
            birth: birth.date(),
            today,
        });
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    let is_birthday_today = (today.month(), today.day()) == (birth.month(), birth.day());

    let (months_until_birthday, days_until_birthday) = if is_birthday_today {
        (0, 0)
    } else {
        let d = (next_birthday(birth, today) - today).num_days();
        if d > 30 { (d / 30, d % 30) } else { (0, d) }
    };

    Ok(AgeReport {
        years,
        months_until_birthday,
        days_until_birthday,
        is_birthday_today,
    })
}

/// Earliest date on or after `today` sharing the birth month and day.
/// A Feb 29 anniversary is observed on Mar 1 in non-leap years.
pub(crate) fn next_birthday(birth: BirthDate, today: NaiveDate) -> NaiveDate {
    let candidate = anniversary_in(today.year(), birth);
    if candidate < today {
        anniversary_in(today.year() + 1, birth)
    } else {
        candidate
    }
}

fn anniversary_in(year: i32, birth: BirthDate) -> NaiveDate {
    // from_ymd_opt only fails here for Feb 29 in a non-leap year
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth.date())
}
