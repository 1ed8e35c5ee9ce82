//! the selected range and the rules that change it

pub mod cursor;

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::dates::{is_weekend, to_iso_date};
use crate::error::PickerError;

pub use cursor::MonthCursor;

/// which of the two calendars a date was picked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    From,
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::From => f.write_str("from"),
            Side::To => f.write_str("to"),
        }
    }
}

impl FromStr for Side {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "from" => Ok(Side::From),
            "to" => Ok(Side::To),
            _ => Err(PickerError::InvalidSelection(s.to_string())),
        }
    }
}

/// start and end of the selection, both inclusive
///
/// Either side may be missing. `to` missing while `from` is set means the
/// range is open and waits for its end. When both are set, `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    /// build a range, rejecting `from > to`
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, PickerError> {
        if let (Some(from), Some(to)) = (from, to)
            && from > to
        {
            return Err(PickerError::InvertedRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// both endpoints on the same day
    pub fn single(date: NaiveDate) -> Self {
        Self {
            from: Some(date),
            to: Some(date),
        }
    }

    /// nothing selected
    pub fn empty() -> Self {
        Self::default()
    }

    /// caller guarantees `from <= to`
    pub(crate) fn bounded(from: NaiveDate, to: NaiveDate) -> Self {
        debug_assert!(from <= to, "{from} must not be after {to}");
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    /// true if both endpoints are set and `date` lies between them
    pub fn contains(&self, date: &NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= *date && *date <= to,
            _ => false,
        }
    }

    /// endpoints formatted as YYYY-MM-DD
    pub fn iso(&self) -> [Option<String>; 2] {
        [
            self.from.as_ref().map(to_iso_date),
            self.to.as_ref().map(to_iso_date),
        ]
    }
}

/// text shown in the picker input, missing endpoints stay blank
impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [from, to] = self.iso();
        write!(
            f,
            "{} - {}",
            from.unwrap_or_default(),
            to.unwrap_or_default()
        )
    }
}

/// how a grid renderer should style a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayMarks {
    pub weekend: bool,
    pub in_range: bool,
    pub endpoint: bool,
    pub disabled: bool,
}

/// current selection plus the month shown on each side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeState {
    range: DateRange,
    from_cursor: MonthCursor,
    to_cursor: MonthCursor,
}

impl RangeState {
    /// start with `today` selected on both sides
    pub fn new(today: NaiveDate) -> Self {
        let cursor = MonthCursor::of(&today);
        Self {
            range: DateRange::single(today),
            from_cursor: cursor,
            to_cursor: cursor,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn cursor(&self, side: Side) -> MonthCursor {
        match side {
            Side::From => self.from_cursor,
            Side::To => self.to_cursor,
        }
    }

    /// Pick `date` in the "from" calendar.
    ///
    /// Returns the new range if the click changed the selection and `None`
    /// if it was ignored.
    pub fn select_from_date(&mut self, date: NaiveDate, today: NaiveDate) -> Option<DateRange> {
        if is_weekend(&date) {
            debug!("ignoring weekend {date} as from date");
            return None;
        }

        if self.range.from == Some(date) {
            // clicked the current start again - deselect everything
            self.range = DateRange::empty();
            self.from_cursor = MonthCursor::of(&today);
            self.to_cursor = self.from_cursor.next();
            return Some(self.range);
        }

        let mut range = self.range;
        range.from = Some(date);
        self.from_cursor = MonthCursor::of(&date);

        if range.to.is_none_or(|to| date > to) {
            range.to = Some(date);
            self.to_cursor = self.from_cursor.next();
        }

        self.range = range;
        Some(self.range)
    }

    /// Pick `date` in the "to" calendar.
    ///
    /// Dates before the current start (or before `today` if nothing is
    /// selected) are ignored. Returns the new range on change.
    pub fn select_to_date(&mut self, date: NaiveDate, today: NaiveDate) -> Option<DateRange> {
        if is_weekend(&date) {
            debug!("ignoring weekend {date} as to date");
            return None;
        }

        if self.range.to == Some(date) {
            // clicked the current end again - keep the start, reopen the range
            self.range.to = None;
            self.to_cursor = self.from_cursor.next();
            return Some(self.range);
        }

        let lower = self.range.from.unwrap_or(today);
        if date < lower {
            debug!("ignoring to date {date} before {lower}");
            return None;
        }

        self.range.to = Some(date);
        self.to_cursor = MonthCursor::of(&date);
        Some(self.range)
    }

    /// replace the selection without any selection rules, used for presets
    pub fn apply_range(&mut self, range: DateRange) -> DateRange {
        self.range = range;
        if let Some(from) = range.from {
            self.from_cursor = MonthCursor::of(&from);
        }
        if let Some(to) = range.to {
            self.to_cursor = MonthCursor::of(&to);
        }
        self.range
    }

    /// Show another month on one side. The selection is untouched.
    ///
    /// Moving the "from" calendar past the "to" calendar pulls the latter
    /// along so the end grid never shows an earlier month than the start grid.
    pub fn navigate(&mut self, side: Side, cursor: MonthCursor) {
        match side {
            Side::From => {
                self.from_cursor = cursor;
                if self.to_cursor < cursor {
                    self.to_cursor = cursor;
                }
            }
            Side::To => self.to_cursor = cursor,
        }
    }

    /// switch the month on one side, zero-based
    pub fn set_month(&mut self, side: Side, month: u32) -> Result<MonthCursor, PickerError> {
        let cursor = self.cursor(side).with_month(month)?;
        self.navigate(side, cursor);
        Ok(cursor)
    }

    /// switch the year on one side
    pub fn set_year(&mut self, side: Side, year: i32) -> Result<MonthCursor, PickerError> {
        let cursor = self.cursor(side).with_year(year)?;
        self.navigate(side, cursor);
        Ok(cursor)
    }

    /// inside the selection and not on a weekend
    pub fn is_date_in_range(&self, date: &NaiveDate) -> bool {
        self.range.contains(date) && !is_weekend(date)
    }

    /// styling flags for `date` in the calendar of `side`
    pub fn day_marks(&self, date: &NaiveDate, side: Side) -> DayMarks {
        let endpoint = match side {
            Side::From => self.range.from,
            Side::To => self.range.to,
        };

        DayMarks {
            weekend: is_weekend(date),
            in_range: self.is_date_in_range(date),
            endpoint: endpoint == Some(*date),
            disabled: side == Side::To && self.range.from.is_some_and(|from| *date < from),
        }
    }
}
