//! named shortcuts that compute a range from the current date

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::dates::{add_days, day_of_week, month_end, month_start};
use crate::error::PickerError;
use crate::range::DateRange;

/// predefined ranges, deserialized from their labels
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    #[serde(rename = "This Month")]
    ThisMonth,
    #[serde(rename = "Next Week")]
    NextWeek,
    #[serde(rename = "Previous Week")]
    PreviousWeek,
    #[serde(rename = "Last 7 Days")]
    Last7Days,
    #[serde(rename = "Last Month")]
    LastMonth,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::ThisMonth,
        Preset::NextWeek,
        Preset::PreviousWeek,
        Preset::Last7Days,
        Preset::LastMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Preset::ThisMonth => "This Month",
            Preset::NextWeek => "Next Week",
            Preset::PreviousWeek => "Previous Week",
            Preset::Last7Days => "Last 7 Days",
            Preset::LastMonth => "Last Month",
        }
    }

    /// Evaluate the preset against `now`.
    ///
    /// Week presets count days from `now` with Sunday = 0, so both start on a
    /// Sunday and span five days. Results may begin or end on a weekend.
    pub fn compute(&self, now: NaiveDate) -> DateRange {
        let (from, to) = match self {
            Preset::ThisMonth => (month_start(&now), month_end(&now)),
            Preset::NextWeek => {
                let from = add_days(&now, 7 - i64::from(day_of_week(&now)));
                (from, add_days(&from, 4))
            }
            Preset::PreviousWeek => {
                let from = add_days(&now, -(i64::from(day_of_week(&now)) + 7));
                (from, add_days(&from, 4))
            }
            Preset::Last7Days => (add_days(&now, -6), now),
            Preset::LastMonth => {
                let end = month_start(&now).pred_opt().unwrap_or(now);
                (month_start(&end), end)
            }
        };

        DateRange::bounded(from, to)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preset {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PickerError::UnknownPreset(s.to_string()))
    }
}

/// the presets offered to the user, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self {
            presets: Preset::ALL.to_vec(),
        }
    }
}

impl PresetCatalog {
    /// restrict the catalog, duplicates are dropped and order is kept
    pub fn new(presets: &[Preset]) -> Self {
        let mut unique = Vec::with_capacity(presets.len());
        for preset in presets {
            if !unique.contains(preset) {
                unique.push(*preset);
            }
        }
        Self { presets: unique }
    }

    /// look up an offered preset by its label
    pub fn find(&self, label: &str) -> Result<Preset, PickerError> {
        let preset: Preset = label.parse()?;
        if self.presets.contains(&preset) {
            Ok(preset)
        } else {
            Err(PickerError::UnknownPreset(label.to_string()))
        }
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.presets.iter().map(Preset::label).collect()
    }
}
