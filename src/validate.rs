//! Date validity and leap-year predicates for each calendar.
//!
//! The validators never panic. In particular the Jalali validator rejects
//! years outside `[1, 3177]` before consulting the break-point table, so user
//! input can never reach the range panic in [`crate::is_leap_jalali`].

use crate::date::{CalendarType, DateParts};
use crate::gregorian::{days_in_gregorian_month, is_leap_gregorian};
use crate::islamic::{days_in_islamic_month, is_leap_islamic};
use crate::jalali::{days_in_jalali_month, is_leap_jalali};

pub const GREGORIAN_YEAR_RANGE: (i32, i32) = (1, 9999);
pub const JALALI_YEAR_RANGE: (i32, i32) = (1, 3177);
pub const ISLAMIC_YEAR_RANGE: (i32, i32) = (1, 9666);

fn year_in(range: (i32, i32), year: i32) -> bool {
    (range.0..=range.1).contains(&year)
}

pub fn is_valid_gregorian_date(date: DateParts) -> bool {
    year_in(GREGORIAN_YEAR_RANGE, date.year)
        && date.day >= 1
        && date.day <= days_in_gregorian_month(date.year, date.month)
}

pub fn is_valid_jalali_date(date: DateParts) -> bool {
    if !year_in(JALALI_YEAR_RANGE, date.year) || !(1..=12).contains(&date.month) {
        return false;
    }
    date.day >= 1 && date.day <= days_in_jalali_month(date.year, date.month)
}

pub fn is_valid_islamic_date(date: DateParts) -> bool {
    year_in(ISLAMIC_YEAR_RANGE, date.year)
        && (1..=12).contains(&date.month)
        && date.day >= 1
        && date.day <= days_in_islamic_month(date.year, date.month)
}

/// Checks `date` against the rules of `calendar`.
pub fn is_valid_date(date: DateParts, calendar: CalendarType) -> bool {
    match calendar {
        CalendarType::Jalali => is_valid_jalali_date(date),
        CalendarType::Gregorian => is_valid_gregorian_date(date),
        CalendarType::Islamic => is_valid_islamic_date(date),
    }
}

/// Returns whether `year` is a leap year in `calendar`.
///
/// # Panics
///
/// For [`CalendarType::Jalali`], panics like [`is_leap_jalali`] when the year
/// is outside the break-point table.
pub fn is_leap_year(year: i32, calendar: CalendarType) -> bool {
    match calendar {
        CalendarType::Jalali => is_leap_jalali(year),
        CalendarType::Gregorian => is_leap_gregorian(year),
        CalendarType::Islamic => is_leap_islamic(year),
    }
}

impl CalendarType {
    pub fn is_valid_date(self, date: DateParts) -> bool {
        is_valid_date(date, self)
    }

    pub fn is_leap_year(self, year: i32) -> bool {
        is_leap_year(year, self)
    }

    /// Month length in this calendar, 0 for a month outside 1-12.
    pub fn days_in_month(self, year: i32, month: u32) -> u32 {
        match self {
            CalendarType::Jalali => days_in_jalali_month(year, month),
            CalendarType::Gregorian => days_in_gregorian_month(year, month),
            CalendarType::Islamic => days_in_islamic_month(year, month),
        }
    }
}
