//! export the weekend list as csv

use serde::Serialize;
use std::io::Write;

use crate::dates::{to_iso_date, weekday_label};
use crate::error::PickerError;
use crate::weekends::WeekendList;

#[derive(Serialize)]
struct WeekendRecord {
    date: String,
    weekday: String,
}

/// write one `date,weekday` row per weekend, with header
pub fn write_weekends<W: Write>(writer: W, weekends: &WeekendList) -> Result<(), PickerError> {
    let mut csv = ::csv::Writer::from_writer(writer);

    if weekends.is_empty() {
        // serialize() only emits the header together with the first record
        csv.write_record(["date", "weekday"])?;
    }

    for date in weekends.iter() {
        csv.serialize(WeekendRecord {
            date: to_iso_date(date),
            weekday: weekday_label(date),
        })?;
    }

    csv.flush()?;
    Ok(())
}

pub fn weekends_to_csv(weekends: &WeekendList) -> Result<String, PickerError> {
    let mut buffer = Vec::new();
    write_weekends(&mut buffer, weekends)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
