//! weekend dates inside the selected range

use chrono::NaiveDate;
use std::ops::Deref;

use crate::dates::{WEEKEND, get_weekdays, to_iso_date, weekday_label};
use crate::range::DateRange;

/// Saturdays and Sundays of a range in ascending order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeekendList(Vec<NaiveDate>);

impl WeekendList {
    /// dates formatted as YYYY-MM-DD
    pub fn iso(&self) -> Vec<String> {
        self.0.iter().map(to_iso_date).collect()
    }

    /// display form, e.g. "2024-03-09 (Sat)"
    pub fn labels(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|date| format!("{} ({})", to_iso_date(date), weekday_label(date)))
            .collect()
    }
}

impl Deref for WeekendList {
    type Target = [NaiveDate];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// all weekend days between `from` and `to`, both inclusive
///
/// An open or empty range has no weekends. Endpoints count when they fall on
/// a weekend themselves, which only presets can produce.
pub fn derive(range: &DateRange) -> WeekendList {
    match (range.from(), range.to()) {
        (Some(from), Some(to)) => WeekendList(get_weekdays(&from, &to, &WEEKEND)),
        _ => WeekendList::default(),
    }
}
