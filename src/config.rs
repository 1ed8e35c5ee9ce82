//! contains the configuration for the execution

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

use crate::controller::{Clock, RangeController};
use crate::error::PickerError;
use crate::presets::{Preset, PresetCatalog};

/// configuration root, every section is optional
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub picker: Picker,
    pub logging: Logging,
}

/// behaviour of the picker itself
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Picker {
    /// pretend today is this date instead of asking the system clock
    pub today: Option<NaiveDate>,
    /// the year dropdown offers this many years before and after the shown year
    pub year_span: i32,
    /// offer only these presets, in this order
    pub presets: Option<Vec<Preset>>,
}

impl Default for Picker {
    fn default() -> Self {
        Self {
            today: None,
            year_span: 5,
            presets: None,
        }
    }
}

impl Picker {
    pub fn clock(&self) -> Clock {
        Clock::from(self.today)
    }

    pub fn catalog(&self) -> PresetCatalog {
        match &self.presets {
            Some(presets) => PresetCatalog::new(presets),
            None => PresetCatalog::default(),
        }
    }

    /// a controller honouring `today` and `presets`
    pub fn controller(&self) -> RangeController {
        RangeController::new(self.clock()).with_presets(self.catalog())
    }
}

/// log filter used when RUST_LOG is not set
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Logging {
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// load Config from a file
pub fn load_config(path: &str) -> Result<Config, PickerError> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
