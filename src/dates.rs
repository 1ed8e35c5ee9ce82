//! some date helper functions
//!
//! Months are zero-based (0 = January) wherever a bare month number is taken
//! or returned, matching the navigation cursor of the picker.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use std::cmp::Ordering;

use crate::error::PickerError;

/// Saturday and Sunday
pub const WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// day of week with 0 = Sunday .. 6 = Saturday
pub fn day_of_week(date: &NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn is_weekend(date: &NaiveDate) -> bool {
    matches!(day_of_week(date), 0 | 6)
}

/// compare two dates by calendar day
pub fn compare(a: &NaiveDate, b: &NaiveDate) -> Ordering {
    a.cmp(b)
}

/// move `date` by `days`, negative values go back in time
///
/// Results beyond the representable calendar stop at `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn add_days(date: &NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// first day of the given month
///
/// # Arguments
/// * `year` - calendar year
/// * `month` - zero-based month, 0 = January
///
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, PickerError> {
    if month > 11 {
        return Err(PickerError::InvalidMonth(month));
    }

    NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(PickerError::InvalidDate {
        year,
        month,
        day: 1,
    })
}

/// last day of the given month, see [`first_of_month`] for the arguments
pub fn last_of_month(year: i32, month: u32) -> Result<NaiveDate, PickerError> {
    first_of_month(year, month).map(|first| month_end(&first))
}

/// first day of the month `date` lies in
pub fn month_start(date: &NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(*date)
}

/// last day of the month `date` lies in
pub fn month_end(date: &NaiveDate) -> NaiveDate {
    let first = month_start(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// format as YYYY-MM-DD
pub fn to_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// parse a YYYY-MM-DD string
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, PickerError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| PickerError::InvalidIsoDate(value.to_string()))
}

/// short english weekday name, e.g. "Sat"
pub fn weekday_label(date: &NaiveDate) -> String {
    date.weekday().to_string()
}

/// extract all weekdays within a given timeframe
///
/// # Arguments
/// * `start` - first day to extract
/// * `end` - last day to extract
/// * `weekdays` - all weekdays to be extracted
///
pub fn get_weekdays(start: &NaiveDate, end: &NaiveDate, weekdays: &[Weekday]) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = *start;

    while current <= *end {
        if weekdays.contains(&current.weekday()) {
            dates.push(current);
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    dates
}
