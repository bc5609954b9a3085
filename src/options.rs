//! Engine configuration.

use std::collections::BTreeMap;

use crate::locale::Locale;

/// Administrative day corrections to the tabular Islamic calendar, keyed by
/// Islamic year.
///
/// Add an entry only when the calendar authority has published one; every
/// holiday of that year then moves by the same number of days.
const ISLAMIC_YEAR_OFFSETS: &[(i32, i32)] = &[];

/// Sparse map from Islamic year to a signed day offset (expected -2..=2).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct IslamicYearOffsets(BTreeMap<i32, i32>);

impl IslamicYearOffsets {
    /// The corrections compiled into the crate.
    pub fn builtin() -> Self {
        ISLAMIC_YEAR_OFFSETS.iter().copied().collect()
    }

    /// Returns a copy with `year` shifted by `offset` days.
    pub fn with(mut self, year: i32, offset: i32) -> Self {
        self.0.insert(year, offset);
        self
    }

    /// Offset for `year`, 0 if none is recorded.
    pub fn get(&self, year: i32) -> i32 {
        self.0.get(&year).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(i32, i32)> for IslamicYearOffsets {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Options for conversion messages, weekday names and holiday lookup.
#[derive(Debug, Clone)]
pub struct CalendarOptions {
    pub islamic_offsets: IslamicYearOffsets,
    /// The locale for names and error messages.
    pub locale: Locale,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            islamic_offsets: IslamicYearOffsets::builtin(),
            locale: Locale::default(),
        }
    }
}
