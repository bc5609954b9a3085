//! tarikh - Jalali, Gregorian and Islamic calendar engine
//!
//! This crate converts dates between the Persian solar Hijri (Jalali), the
//! proleptic Gregorian and the tabular Islamic calendars, validates dates in
//! each of them, performs day-level arithmetic and resolves fixed holidays.
//!
//! Dates are plain [`DateParts`] triples; the calendar they belong to is
//! always passed alongside them as a [`CalendarType`]. Conversions between
//! non-Gregorian calendars are routed through the Gregorian calendar.
//!
//! ```
//! use tarikh::{convert_date, CalendarType, ConversionRequest, DateParts};
//!
//! let nowruz = DateParts::new(1403, 1, 1);
//! let request = ConversionRequest::new(nowruz, CalendarType::Jalali, CalendarType::Gregorian);
//! assert_eq!(convert_date(request), Ok(DateParts::new(2024, 3, 20)));
//! ```
//!
//! Invalid user input surfaces as a [`ConversionError`]. Asking the Jalali
//! leap-year table about a year it does not cover is treated as a defect and
//! panics; the `try_*` variants return a [`CalendarError`] instead.
//!
//! This means [`convert_date`] is not panic-free for every valid Gregorian
//! date: with a Jalali target, Gregorian years before 560 or after 3798 fall
//! outside the table. Use [`try_gregorian_to_jalali`] when such years can
//! reach the conversion.

pub mod error;

mod arithmetic;
mod convert;
mod date;
mod gregorian;
mod holiday;
mod islamic;
mod jalali;
mod locale;
mod options;
mod validate;

pub use arithmetic::{
    add_days, day_of_year, difference_in_days, difference_in_ymd, get_weekday_name,
    get_weekday_name_with, weekday_index, DateDelta,
};
pub use convert::{
    convert_date, convert_date_with, from_gregorian, normalize_to_gregorian, ConversionRequest,
};
pub use date::{CalendarType, DateParts};
pub use error::{CalendarError, ConversionError, ErrorCode, ParseDateError};
pub use gregorian::{days_in_gregorian_month, gregorian_to_jdn, is_leap_gregorian, jdn_to_gregorian};
pub use holiday::{
    get_islamic_holiday, get_islamic_holiday_with, get_jalali_holiday, list_islamic_holidays,
    list_islamic_holidays_with, list_jalali_holidays, HolidayEntry, HolidayResult, HolidayType,
    ISLAMIC_HOLIDAYS, JALALI_HOLIDAYS,
};
pub use islamic::{
    days_in_islamic_month, gregorian_to_islamic, is_leap_islamic, islamic_to_gregorian,
    islamic_to_jdn, jdn_to_islamic, ISLAMIC_EPOCH,
};
pub use jalali::{
    days_in_jalali_month, gregorian_to_jalali, is_leap_jalali, jalali_calendar,
    jalali_to_gregorian, try_gregorian_to_jalali, try_is_leap_jalali, try_jalali_to_gregorian,
    JalaliYear, JALALI_BREAKS,
};
pub use locale::Locale;
pub use options::{CalendarOptions, IslamicYearOffsets};
pub use validate::{
    is_leap_year, is_valid_date, is_valid_gregorian_date, is_valid_islamic_date,
    is_valid_jalali_date, GREGORIAN_YEAR_RANGE, ISLAMIC_YEAR_RANGE, JALALI_YEAR_RANGE,
};

/// Month name of `calendar` in the default (Persian) locale.
pub fn month_name(calendar: CalendarType, month: u32) -> Option<&'static str> {
    Locale::default().month_name(calendar, month)
}
