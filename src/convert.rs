//! Conversion between calendars.
//!
//! Every cross-calendar conversion is routed through the Gregorian calendar,
//! so only four directional primitives exist: Jalali ↔ Gregorian and
//! Islamic ↔ Gregorian.

use tracing::debug;

use crate::date::{CalendarType, DateParts};
use crate::error::{ConversionError, ErrorCode};
use crate::islamic::{gregorian_to_islamic, islamic_to_gregorian};
use crate::jalali::{gregorian_to_jalali, jalali_to_gregorian};
use crate::options::CalendarOptions;
use crate::validate::{is_valid_gregorian_date, is_valid_islamic_date, is_valid_jalali_date};

/// A date together with its source and target calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest {
    pub date: DateParts,
    pub from: CalendarType,
    pub to: CalendarType,
}

impl ConversionRequest {
    pub fn new(date: DateParts, from: CalendarType, to: CalendarType) -> Self {
        Self { date, from, to }
    }
}

/// Validates `date` in `from` and expresses it in the Gregorian calendar.
///
/// Returns `None` if the date is not valid in `from`.
pub fn normalize_to_gregorian(date: DateParts, from: CalendarType) -> Option<DateParts> {
    match from {
        CalendarType::Gregorian => is_valid_gregorian_date(date).then_some(date),
        CalendarType::Jalali => is_valid_jalali_date(date).then(|| jalali_to_gregorian(date)),
        CalendarType::Islamic => is_valid_islamic_date(date).then(|| islamic_to_gregorian(date)),
    }
}

/// Expresses an already valid Gregorian date in `to`.
///
/// # Panics
///
/// For [`CalendarType::Jalali`], panics if the Gregorian year falls outside
/// the Jalali break-point table (before 560 or after 3798).
pub fn from_gregorian(date: DateParts, to: CalendarType) -> DateParts {
    match to {
        CalendarType::Gregorian => date,
        CalendarType::Jalali => gregorian_to_jalali(date),
        CalendarType::Islamic => gregorian_to_islamic(date),
    }
}

/// Converts a date between calendars using the default options.
///
/// An identity request (`from == to`) returns the date untouched without
/// validating it.
///
/// # Errors
///
/// Returns a [`ConversionError`] whose code names the source calendar if the
/// date is not valid there.
///
/// # Panics
///
/// See [`from_gregorian`].
pub fn convert_date(request: ConversionRequest) -> Result<DateParts, ConversionError> {
    convert_date_with(request, &CalendarOptions::default())
}

/// Like [`convert_date`], taking error messages from `opts.locale`.
pub fn convert_date_with(
    request: ConversionRequest,
    opts: &CalendarOptions,
) -> Result<DateParts, ConversionError> {
    let ConversionRequest { date, from, to } = request;
    if from == to {
        return Ok(date);
    }

    let Some(gregorian) = normalize_to_gregorian(date, from) else {
        let code = ErrorCode::for_calendar(from);
        debug!(
            calendar = ?from,
            year = date.year,
            month = date.month,
            day = date.day,
            code = code.as_str(),
            "rejecting invalid source date"
        );
        return Err(ConversionError {
            code,
            message: opts.locale.error_message(code),
        });
    };

    Ok(from_gregorian(gregorian, to))
}
