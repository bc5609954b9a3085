//! Localized names and messages.

mod builtin;

pub use builtin::Locale;
