use chrono::{Datelike, Months, NaiveDate};

use crate::dates;
use crate::error::PickerError;

/// the month a calendar grid is displaying
///
/// Independent of the selected dates: users may browse to any month without
/// touching the range. Ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// cursor for a zero-based `month` in `year`
    pub fn new(year: i32, month: u32) -> Result<Self, PickerError> {
        dates::first_of_month(year, month).map(|first| Self { first })
    }

    /// cursor for the month `date` lies in
    pub fn of(date: &NaiveDate) -> Self {
        Self {
            first: dates::month_start(date),
        }
    }

    /// zero-based month, 0 = January
    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// the following month, December rolls into January of the next year
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// same year, other month
    pub fn with_month(&self, month: u32) -> Result<Self, PickerError> {
        Self::new(self.year(), month)
    }

    /// same month, other year
    pub fn with_year(&self, year: i32) -> Result<Self, PickerError> {
        Self::new(year, self.month())
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        dates::month_end(&self.first)
    }

    /// every day of the month in ascending order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let last = self.last_day();
        self.first.iter_days().take_while(move |day| *day <= last)
    }
}
