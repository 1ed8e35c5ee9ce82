use crate::config::Config;
use crate::controller::{LogObserver, RangeController};

/// widest year dropdown, in years before and after the shown year
const MAX_YEAR_SPAN: i32 = 100;

/// Application state
pub struct AppState {
    pub controller: RangeController,
    pub year_span: i32,
    pub error: Option<String>,
    pub success_message: Option<String>,
    pub success_message_expires_at: Option<std::time::Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    /// Create the state for the given configuration
    pub fn new(config: &Config) -> Self {
        Self {
            controller: config.picker.controller().with_observer(LogObserver),
            year_span: config.picker.year_span.clamp(1, MAX_YEAR_SPAN),
            error: None,
            success_message: None,
            success_message_expires_at: None,
        }
    }

    /// years offered in the dropdown around `year`, ascending, always including `year`
    pub fn year_options(&self, year: i32) -> Vec<i32> {
        (year.saturating_sub(self.year_span)..year.saturating_add(self.year_span)).collect()
    }
}
