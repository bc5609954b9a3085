//! Calendar-agnostic date value and the calendar selector.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseDateError;

/// A `(year, month, day)` triple.
///
/// The value carries no calendar of its own; every operation receives the
/// calendar alongside it. Construction never validates, so a `DateParts` may
/// hold a triple that is invalid in every calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Converts a Gregorian `DateParts` into a chrono date.
    ///
    /// Returns `None` if the triple is not a valid Gregorian date.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<(i32, u32, u32)> for DateParts {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<DateParts> for (i32, u32, u32) {
    fn from(d: DateParts) -> Self {
        (d.year, d.month, d.day)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for DateParts {
    fn from(d: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(d.year(), d.month(), d.day())
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateParts {
    type Err = ParseDateError;

    /// Parses `year/month/day` or `year-month-day`. Only the shape is
    /// checked; calendar validity is left to the validators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDateError::Empty);
        }

        let sep = if s.contains('/') { '/' } else { '-' };
        let fields: Vec<&str> = s.split(sep).map(str::trim).collect();
        if fields.len() != 3 {
            return Err(ParseDateError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let year = parse_field::<i32>("year", fields[0])?;
        let month = parse_field::<u32>("month", fields[1])?;
        let day = parse_field::<u32>("day", fields[2])?;
        Ok(Self::new(year, month, day))
    }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParseDateError> {
    value.parse().map_err(|_| ParseDateError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// The calendar system a [`DateParts`] is interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarType {
    /// Persian solar Hijri
    Jalali,
    /// Proleptic Gregorian
    Gregorian,
    /// Tabular (arithmetic) lunar Hijri
    Islamic,
}

impl CalendarType {
    /// All supported calendars.
    pub fn all() -> [CalendarType; 3] {
        [
            CalendarType::Jalali,
            CalendarType::Gregorian,
            CalendarType::Islamic,
        ]
    }
}
