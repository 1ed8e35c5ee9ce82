//! error type shared by the library and the binary

use chrono::NaiveDate;
use thiserror::Error;

/// Failures reported to the caller.
///
/// Selecting a weekend or a "to" date before "from" is not an error, those
/// clicks are simply ignored. The variants below describe input that a
/// well-behaved collaborator never produces, or I/O around config and export.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("month {0} is outside 0..=11")]
    InvalidMonth(u32),

    #[error("{year}-{month}-{day} is not a valid calendar date (month is zero-based)")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("range starts at {from} but ends earlier at {to}")]
    InvertedRange { from: NaiveDate, to: NaiveDate },

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("expected a date formatted as YYYY-MM-DD, got {0:?}")]
    InvalidIsoDate(String),

    #[error("expected a selection like from:YYYY-MM-DD or to:YYYY-MM-DD, got {0:?}")]
    InvalidSelection(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
