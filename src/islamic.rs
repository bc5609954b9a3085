//! Tabular Islamic (Hijri) calendar
//!
//! This is the arithmetic civil calendar, not an observational one: months
//! alternate 30 and 29 days and 11 years of every 30-year cycle add a 30th
//! day to Dhu al-Hijjah. Conversions go through the Julian Day Number, with
//! 1 Muharram AH 1 fixed at JDN 1948440 (19 July 622, proleptic Gregorian).
//!
//! Published calendars that follow moon sighting can differ from this
//! scheme by a day or two; see [`crate::IslamicYearOffsets`] for the
//! administrative correction applied to holidays.

use crate::date::DateParts;
use crate::gregorian::{gregorian_to_jdn, jdn_to_gregorian};

/// JDN of 1 Muharram AH 1
pub const ISLAMIC_EPOCH: i32 = 1948440;

/// Positions within the 30-year cycle that are leap years.
const LEAP_YEARS_IN_CYCLE: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Returns true if `year` has a 355th day.
pub fn is_leap_islamic(year: i32) -> bool {
    let position = (year - 1).rem_euclid(30) + 1;
    LEAP_YEARS_IN_CYCLE.contains(&position)
}

/// Returns the number of days in an Islamic month, or 0 for a month outside 1-12.
pub fn days_in_islamic_month(year: i32, month: u32) -> u32 {
    match month {
        12 if is_leap_islamic(year) => 30,
        12 => 29,
        1..=11 if month % 2 == 1 => 30,
        1..=11 => 29,
        _ => 0,
    }
}

/// Convert an Islamic date to a Julian Day Number
pub fn islamic_to_jdn(date: DateParts) -> i32 {
    let year = date.year;
    let month = date.month as i32;

    let days_before_month = 30 * (month - 1) - (month - 1).div_euclid(2);
    let days_before_year = (year - 1) * 354 + (3 + 11 * year).div_euclid(30);

    date.day as i32 + days_before_month + days_before_year + ISLAMIC_EPOCH - 1
}

/// Convert a Julian Day Number to an Islamic date
pub fn jdn_to_islamic(jdn: i32) -> DateParts {
    let year = (30 * (jdn - ISLAMIC_EPOCH) + 10646).div_euclid(10631);

    let mut month = 1;
    while month < 12 && jdn >= islamic_to_jdn(DateParts::new(year, month + 1, 1)) {
        month += 1;
    }

    let day = jdn - islamic_to_jdn(DateParts::new(year, month, 1)) + 1;
    DateParts::new(year, month, day as u32)
}

/// Convert an Islamic date to the Gregorian calendar
pub fn islamic_to_gregorian(date: DateParts) -> DateParts {
    jdn_to_gregorian(islamic_to_jdn(date))
}

/// Convert a Gregorian date to the Islamic calendar
pub fn gregorian_to_islamic(date: DateParts) -> DateParts {
    jdn_to_islamic(gregorian_to_jdn(date))
}
