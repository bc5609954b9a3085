//! Error types for conversion, range and parsing failures.

use std::fmt;

use thiserror::Error;

use crate::date::CalendarType;

/// Machine-readable code attached to a failed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidJalaliDate,
    InvalidIslamicDate,
    InvalidGregorianDate,
}

impl ErrorCode {
    /// Selects the code reported when a date in `calendar` fails validation.
    pub fn for_calendar(calendar: CalendarType) -> Self {
        match calendar {
            CalendarType::Jalali => ErrorCode::InvalidJalaliDate,
            CalendarType::Islamic => ErrorCode::InvalidIslamicDate,
            CalendarType::Gregorian => ErrorCode::InvalidGregorianDate,
        }
    }

    /// Returns the stable string form, e.g. `INVALID_JALALI_DATE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidJalaliDate => "INVALID_JALALI_DATE",
            ErrorCode::InvalidIslamicDate => "INVALID_ISLAMIC_DATE",
            ErrorCode::InvalidGregorianDate => "INVALID_GREGORIAN_DATE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date could not be converted because it is not valid in its source calendar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ConversionError {
    pub code: ErrorCode,
    /// Localized, user-facing description.
    pub message: &'static str,
}

/// Errors raised by the calendar arithmetic itself.
///
/// These indicate that a lookup table needs extending, not that a user typed
/// a bad date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Jalali year {year} is outside the break-point table range [{min}, {max})")]
    JalaliYearOutOfRange { year: i32, min: i32, max: i32 },
}

/// Errors that can occur when parsing a `year/month/day` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDateError {
    #[error("empty date string")]
    Empty,

    #[error("expected 3 date fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
