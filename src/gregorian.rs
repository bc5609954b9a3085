//! Proleptic Gregorian calendar and Julian Day Number bridging.
//!
//! The Julian Day Number (JDN) is a continuous day count used as the
//! calendar-neutral meeting point between Gregorian and Islamic dates and as
//! the absolute day index behind the date arithmetic. All divisions below are
//! floor divisions; for years ≥ 1 every intermediate is non-negative.

use crate::date::DateParts;

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given year is a leap year
pub fn is_leap_gregorian(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month/year.
///
/// Returns 0 for a month outside 1-12, which makes any day check against it
/// fail naturally.
pub fn days_in_gregorian_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_gregorian(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Convert a Gregorian date to a Julian Day Number
pub fn gregorian_to_jdn(date: DateParts) -> i32 {
    let month = date.month as i32;
    let day = date.day as i32;

    let a = (14 - month).div_euclid(12);
    let y = date.year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Convert a Julian Day Number to a Gregorian date
pub fn jdn_to_gregorian(jdn: i32) -> DateParts {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146097);
    let c = a - (146097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);

    DateParts::new(year, month as u32, day as u32)
}
