//! Fixed holiday tables for the Jalali and Islamic calendars.
//!
//! Entries are keyed by `(month, day)` and carry no year. Islamic entries are
//! laid out on the tabular calendar; when an administrative offset is
//! recorded for a year (see [`IslamicYearOffsets`](crate::IslamicYearOffsets))
//! listed holidays of that year move by that many days and lookups move the
//! query date by the same signed amount before matching.

use tracing::trace;

use crate::date::DateParts;
use crate::islamic::days_in_islamic_month;
use crate::options::CalendarOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayType {
    /// Public day off
    Official,
    /// Observance without a day off
    Cultural,
}

/// A year-independent table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayEntry {
    pub month: u32,
    pub day: u32,
    pub title: &'static str,
    pub kind: HolidayType,
}

/// A holiday placed on a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HolidayResult {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub title: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: HolidayType,
}

impl HolidayResult {
    fn at(date: DateParts, entry: &HolidayEntry) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            title: entry.title,
            kind: entry.kind,
        }
    }

    /// The date the holiday falls on, in the table's calendar.
    pub fn date(&self) -> DateParts {
        DateParts::new(self.year, self.month, self.day)
    }
}

const fn entry(month: u32, day: u32, title: &'static str, kind: HolidayType) -> HolidayEntry {
    HolidayEntry {
        month,
        day,
        title,
        kind,
    }
}

use HolidayType::{Cultural, Official};

/// Solar-calendar holidays.
pub static JALALI_HOLIDAYS: &[HolidayEntry] = &[
    entry(1, 1, "نوروز", Official),
    entry(1, 2, "عید نوروز", Official),
    entry(1, 3, "عید نوروز", Official),
    entry(1, 4, "عید نوروز", Official),
    entry(1, 12, "روز جمهوری اسلامی", Official),
    entry(1, 13, "روز طبیعت", Official),
    entry(2, 1, "روز بزرگداشت سعدی", Cultural),
    entry(2, 25, "روز بزرگداشت فردوسی", Cultural),
    entry(3, 14, "رحلت امام خمینی", Official),
    entry(3, 15, "قیام ۱۵ خرداد", Official),
    entry(7, 8, "روز بزرگداشت مولوی", Cultural),
    entry(7, 20, "روز بزرگداشت حافظ", Cultural),
    entry(9, 30, "شب یلدا", Cultural),
    entry(11, 22, "پیروزی انقلاب اسلامی", Official),
    entry(12, 29, "ملی شدن صنعت نفت", Official),
];

/// Lunar-calendar holidays on the tabular Islamic calendar.
pub static ISLAMIC_HOLIDAYS: &[HolidayEntry] = &[
    entry(1, 1, "آغاز سال هجری قمری", Cultural),
    entry(1, 9, "تاسوعای حسینی", Official),
    entry(1, 10, "عاشورای حسینی", Official),
    entry(2, 20, "اربعین حسینی", Official),
    entry(2, 28, "رحلت پیامبر اکرم و شهادت امام حسن مجتبی", Official),
    entry(3, 8, "شهادت امام حسن عسکری", Official),
    entry(3, 17, "میلاد پیامبر اکرم و امام جعفر صادق", Official),
    entry(6, 3, "شهادت حضرت فاطمه زهرا", Official),
    entry(7, 13, "ولادت امام علی", Official),
    entry(7, 27, "مبعث پیامبر اکرم", Official),
    entry(8, 15, "ولادت حضرت قائم", Official),
    entry(9, 1, "آغاز ماه رمضان", Cultural),
    entry(9, 19, "شب قدر", Cultural),
    entry(9, 21, "شهادت امام علی", Official),
    entry(10, 1, "عید سعید فطر", Official),
    entry(10, 2, "تعطیل عید سعید فطر", Official),
    entry(10, 25, "شهادت امام جعفر صادق", Official),
    entry(12, 10, "عید سعید قربان", Official),
    entry(12, 18, "عید سعید غدیر خم", Official),
];

fn find(table: &[HolidayEntry], month: u32, day: u32) -> Option<&HolidayEntry> {
    table.iter().find(|e| e.month == month && e.day == day)
}

/// Holiday on a Jalali date, if any.
pub fn get_jalali_holiday(date: DateParts) -> Option<HolidayResult> {
    find(JALALI_HOLIDAYS, date.month, date.day).map(|e| HolidayResult::at(date, e))
}

/// Every Jalali holiday placed in `year`.
pub fn list_jalali_holidays(year: i32) -> Vec<HolidayResult> {
    JALALI_HOLIDAYS
        .iter()
        .map(|e| HolidayResult::at(DateParts::new(year, e.month, e.day), e))
        .collect()
}

/// Holiday on an Islamic date, if any, using the builtin year offsets.
pub fn get_islamic_holiday(date: DateParts) -> Option<HolidayResult> {
    get_islamic_holiday_with(date, &CalendarOptions::default())
}

/// Holiday on an Islamic date under `opts.islamic_offsets`.
///
/// The query is moved by the year's signed offset before matching, so with
/// an offset of +1 a query on 10/1 finds the 10/2 entry. The result reports
/// the queried date.
pub fn get_islamic_holiday_with(date: DateParts, opts: &CalendarOptions) -> Option<HolidayResult> {
    let offset = opts.islamic_offsets.get(date.year);
    let shifted = if offset == 0 {
        date
    } else {
        trace!(year = date.year, offset, "applying islamic year offset");
        shift_islamic(date, offset)
    };
    find(ISLAMIC_HOLIDAYS, shifted.month, shifted.day).map(|e| HolidayResult::at(date, e))
}

/// Every Islamic holiday of `year`, using the builtin year offsets.
pub fn list_islamic_holidays(year: i32) -> Vec<HolidayResult> {
    list_islamic_holidays_with(year, &CalendarOptions::default())
}

/// Every Islamic holiday of `year`, each moved by the year's offset.
///
/// A shift across Muharram 1 or the end of Dhu al-Hijjah carries the year
/// along with it.
pub fn list_islamic_holidays_with(year: i32, opts: &CalendarOptions) -> Vec<HolidayResult> {
    let offset = opts.islamic_offsets.get(year);
    if offset != 0 {
        trace!(year, offset, "applying islamic year offset");
    }
    ISLAMIC_HOLIDAYS
        .iter()
        .map(|e| HolidayResult::at(shift_islamic(DateParts::new(year, e.month, e.day), offset), e))
        .collect()
}

/// Moves an Islamic date by `offset` days, one day at a time.
fn shift_islamic(mut date: DateParts, offset: i32) -> DateParts {
    for _ in 0..offset.unsigned_abs() {
        if offset > 0 {
            if date.day < days_in_islamic_month(date.year, date.month) {
                date.day += 1;
                continue;
            }
            date.day = 1;
            if date.month == 12 {
                date.month = 1;
                date.year += 1;
            } else {
                date.month += 1;
            }
        } else if date.day > 1 {
            date.day -= 1;
        } else {
            if date.month == 1 {
                date.month = 12;
                date.year -= 1;
            } else {
                date.month -= 1;
            }
            date.day = days_in_islamic_month(date.year, date.month);
        }
    }
    date
}
