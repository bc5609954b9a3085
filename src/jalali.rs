//! Jalali (Persian solar Hijri) calendar
//!
//! Leap years follow the 33-year cycle as corrected by a table of break-point
//! years at which the cycle pattern shifts. The arithmetic is the public-domain
//! jalaali method: it counts days from its own anchor and converts to and from
//! the Gregorian calendar directly, without going through the Julian Day Number
//! routines used by the Islamic calendar.
//!
//! All divisions in this module truncate toward zero and all remainders take
//! the sign of the dividend. The leap indicator depends on that exact
//! behavior for years near the break points, so do not rewrite the integer
//! expressions into floor/Euclidean form.

use crate::date::DateParts;
use crate::error::CalendarError;

/// Years at which the 33-year leap pattern shifts.
///
/// Leap-year computation is defined for `JALALI_BREAKS[0] <= year < JALALI_BREAKS[19]`.
pub const JALALI_BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Per-year facts derived from the break-point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliYear {
    /// Years since the last leap year (0 means this year is leap, range 0..=4).
    pub leap: i32,
    /// Gregorian year in which this Jalali year begins.
    pub gregorian_year: i32,
    /// Day of March on which Farvardin 1 falls.
    pub march_day: i32,
}

impl JalaliYear {
    pub fn is_leap(&self) -> bool {
        self.leap == 0
    }
}

/// Scans the break-point table for `year`.
///
/// # Errors
///
/// Returns [`CalendarError::JalaliYearOutOfRange`] if `year` is before the
/// first break point or at/after the last one.
pub fn jalali_calendar(year: i32) -> Result<JalaliYear, CalendarError> {
    let first = JALALI_BREAKS[0];
    let last = JALALI_BREAKS[JALALI_BREAKS.len() - 1];
    if year < first || year >= last {
        return Err(CalendarError::JalaliYearOutOfRange {
            year,
            min: first,
            max: last,
        });
    }

    let gregorian_year = year + 621;
    let mut leap_j = -14;
    let mut jp = first;
    let mut jump = 0;

    for &jm in &JALALI_BREAKS[1..] {
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = year - jp;

    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(JalaliYear {
        leap,
        gregorian_year,
        march_day,
    })
}

/// Fallible form of [`is_leap_jalali`].
pub fn try_is_leap_jalali(year: i32) -> Result<bool, CalendarError> {
    Ok(jalali_calendar(year)?.is_leap())
}

/// Returns true if `year` has a 30th day of Esfand.
///
/// # Panics
///
/// Panics if `year` is outside the break-point table range `[-61, 3178)`.
/// Such a query means the table needs extending; use [`try_is_leap_jalali`]
/// to handle it as a value instead.
pub fn is_leap_jalali(year: i32) -> bool {
    in_table_range(try_is_leap_jalali(year))
}

/// Returns the number of days in a Jalali month, or 0 for a month outside 1-12.
///
/// # Panics
///
/// For month 12, panics under the same conditions as [`is_leap_jalali`].
pub fn days_in_jalali_month(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_jalali(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Fallible form of [`jalali_to_gregorian`].
pub fn try_jalali_to_gregorian(date: DateParts) -> Result<DateParts, CalendarError> {
    let info = jalali_calendar(date.year)?;
    let month = date.month as i32;
    let day_number = day_number_from_gregorian(info.gregorian_year, 3, info.march_day)
        + (month - 1) * 31
        - month / 7 * (month - 7)
        + date.day as i32
        - 1;
    Ok(gregorian_from_day_number(day_number))
}

/// Convert a Jalali date to the Gregorian calendar.
///
/// The input is not validated; check it with [`crate::is_valid_jalali_date`] first.
///
/// # Panics
///
/// Panics if the Jalali year is outside the break-point table range.
pub fn jalali_to_gregorian(date: DateParts) -> DateParts {
    in_table_range(try_jalali_to_gregorian(date))
}

/// Fallible form of [`gregorian_to_jalali`].
pub fn try_gregorian_to_jalali(date: DateParts) -> Result<DateParts, CalendarError> {
    let day_number = day_number_from_gregorian(date.year, date.month as i32, date.day as i32);
    jalali_from_day_number(day_number)
}

/// Convert a Gregorian date to the Jalali calendar.
///
/// # Panics
///
/// Panics if the resulting Jalali year is outside the break-point table
/// range, i.e. for Gregorian years before 560 or after 3798.
pub fn gregorian_to_jalali(date: DateParts) -> DateParts {
    in_table_range(try_gregorian_to_jalali(date))
}

fn jalali_from_day_number(day_number: i32) -> Result<DateParts, CalendarError> {
    let gregorian_year = gregorian_from_day_number(day_number).year;
    let mut year = gregorian_year - 621;
    let info = jalali_calendar(year)?;
    let farvardin_1 = day_number_from_gregorian(gregorian_year, 3, info.march_day);

    let mut k = day_number - farvardin_1;
    if k >= 0 {
        if k <= 185 {
            // first six months have 31 days
            return Ok(DateParts::new(year, (1 + k / 31) as u32, (k % 31 + 1) as u32));
        }
        k -= 186;
    } else {
        // still in the tail of the previous Jalali year
        year -= 1;
        k += 179;
        if info.leap == 1 {
            k += 1;
        }
    }

    Ok(DateParts::new(year, (7 + k / 30) as u32, (k % 30 + 1) as u32))
}

/// Day number of a Gregorian date on the jalaali method's own scale.
fn day_number_from_gregorian(year: i32, month: i32, day: i32) -> i32 {
    let d = (year + (month - 8) / 6 + 100100) * 1461 / 4 + (153 * ((month + 9) % 12) + 2) / 5 + day
        - 34840408;
    d - (year + 100100 + (month - 8) / 6) / 100 * 3 / 4 + 752
}

fn gregorian_from_day_number(day_number: i32) -> DateParts {
    let mut j = 4 * day_number + 139361631;
    j += (4 * day_number + 183187720) / 146097 * 3 / 4 * 4 - 3908;
    let i = (j % 1461) / 4 * 5 + 308;

    let day = (i % 153) / 5 + 1;
    let month = (i / 153) % 12 + 1;
    let year = j / 1461 - 100100 + (8 - month) / 6;

    DateParts::new(year, month as u32, day as u32)
}

fn in_table_range<T>(result: Result<T, CalendarError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
