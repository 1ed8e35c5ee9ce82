pub mod app;
pub mod calendar;
pub mod state;
pub mod utils;

// Re-export public items
pub use self::app::{Message, PickerApp};
pub use self::calendar::{MonthOption, month_grid};

use crate::config::Config;

/// Run the GUI application
pub fn run(config: Config) -> iced::Result {
    use iced::Application;
    self::app::PickerApp::run(iced::Settings::with_flags(config))
}
