//! Library and Binary to pick a date range, either day by day in two calendars or
//! through presets like "Last 7 Days", and list every weekend inside that range
//! for an example how to use: see main.rs

pub mod config;
pub mod controller;
pub mod csv;
pub mod dates;
pub mod error;
pub mod gui;
pub mod presets;
pub mod range;
pub mod weekends;

pub use controller::{Clock, LogObserver, RangeChange, RangeController, RangeObserver};
pub use error::PickerError;
pub use presets::{Preset, PresetCatalog};
pub use range::{DateRange, DayMarks, MonthCursor, RangeState, Side};
pub use weekends::WeekendList;
