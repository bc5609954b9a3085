//! Day-level arithmetic on Gregorian dates.
//!
//! Every function here interprets its `DateParts` as Gregorian. Dates in
//! other calendars must be normalized first with
//! [`crate::normalize_to_gregorian`].

use crate::date::DateParts;
use crate::gregorian::{days_in_gregorian_month, gregorian_to_jdn, jdn_to_gregorian};
use crate::options::CalendarOptions;

/// A civil "X years, Y months, Z days" difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateDelta {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Moves `date` by `offset_days`, crossing month and year boundaries in
/// either direction.
pub fn add_days(date: DateParts, offset_days: i32) -> DateParts {
    jdn_to_gregorian(gregorian_to_jdn(date) + offset_days)
}

/// Signed number of elapsed days from `start` to `end`.
pub fn difference_in_days(start: DateParts, end: DateParts) -> i32 {
    gregorian_to_jdn(end) - gregorian_to_jdn(start)
}

/// Field-wise difference such that adding the years, then the months, then
/// the days to `start` lands on `end`.
///
/// A negative day count borrows the length of the month before `end`'s
/// month; a negative month count then borrows a year. Only one borrow of
/// each kind is made.
pub fn difference_in_ymd(start: DateParts, end: DateParts) -> DateDelta {
    let mut years = end.year - start.year;
    let mut months = end.month as i32 - start.month as i32;
    let mut days = end.day as i32 - start.day as i32;

    if days < 0 {
        let (year, month) = if end.month == 1 {
            (end.year - 1, 12)
        } else {
            (end.year, end.month - 1)
        };
        days += days_in_gregorian_month(year, month) as i32;
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    DateDelta {
        years,
        months,
        days,
    }
}

/// 1-based ordinal of `date` within its year.
pub fn day_of_year(date: DateParts) -> u32 {
    (1..date.month)
        .map(|m| days_in_gregorian_month(date.year, m))
        .sum::<u32>()
        + date.day
}

/// Day of the week, 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: DateParts) -> u32 {
    (gregorian_to_jdn(date) + 1).rem_euclid(7) as u32
}

/// Persian name of the weekday of `date`.
pub fn get_weekday_name(date: DateParts) -> &'static str {
    get_weekday_name_with(date, &CalendarOptions::default())
}

/// Weekday name of `date` in `opts.locale`.
pub fn get_weekday_name_with(date: DateParts, opts: &CalendarOptions) -> &'static str {
    let names = &opts.locale.weekday_names;
    match weekday_index(date) {
        i @ 0..=5 => names[i as usize],
        _ => names[6],
    }
}
