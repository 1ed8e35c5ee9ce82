use chrono::NaiveDate;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Application, Command, Element, Length, Theme, executor};

use crate::config::Config;
use crate::csv::weekends_to_csv;
use crate::presets::Preset;
use crate::range::Side;

use super::calendar;
use super::state::AppState;
use super::utils;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    ToggleCalendars,
    Confirm,
    DaySelected(NaiveDate, Side),
    MonthSelected(Side, u32), // zero-based month
    YearSelected(Side, i32),
    PresetSelected(Preset),
    ExportWeekends,
    WeekendsExported(Result<(), String>),
    CheckMessageExpiry,
    ShowSuccessMessage(String),
}

/// Main application
pub struct PickerApp {
    state: AppState,
}

impl Application for PickerApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Config;

    fn new(flags: Config) -> (Self, Command<Message>) {
        (
            Self {
                state: AppState::new(&flags),
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        String::from("Weekend Range Picker")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ToggleCalendars => {
                self.state.controller.toggle_visible();
                Command::none()
            }
            Message::Confirm => {
                self.state.controller.hide();
                Command::none()
            }
            Message::DaySelected(date, side) => {
                self.state.controller.select_date(date, side);
                self.state.error = None;
                Command::none()
            }
            Message::MonthSelected(side, month) => {
                if let Err(e) = self.state.controller.set_cursor_month(side, month) {
                    self.state.error = Some(e.to_string());
                }
                Command::none()
            }
            Message::YearSelected(side, year) => {
                if let Err(e) = self.state.controller.set_cursor_year(side, year) {
                    self.state.error = Some(e.to_string());
                }
                Command::none()
            }
            Message::PresetSelected(preset) => {
                self.state.controller.apply(preset);
                self.state.error = None;
                Command::none()
            }
            Message::ExportWeekends => {
                match weekends_to_csv(self.state.controller.current_weekends()) {
                    Ok(csv_content) => {
                        let filename =
                            utils::generate_filename(&self.state.controller.current_range());
                        let filename_for_message = filename.clone();
                        Command::perform(utils::save_file(filename, csv_content), move |result| {
                            if result.is_ok() {
                                Message::ShowSuccessMessage(format!(
                                    "Weekends saved to {}",
                                    filename_for_message
                                ))
                            } else {
                                Message::WeekendsExported(result)
                            }
                        })
                    }
                    Err(e) => {
                        self.state.error = Some(format!("Failed to create CSV: {}", e));
                        Command::none()
                    }
                }
            }
            Message::WeekendsExported(Ok(())) => Command::none(),
            Message::WeekendsExported(Err(e)) => {
                tracing::warn!("export failed: {e}");
                self.state.error = Some(format!("Error saving weekends: {}", e));
                Command::none()
            }
            Message::ShowSuccessMessage(message) => {
                self.state.success_message = Some(message);
                self.state.success_message_expires_at =
                    Some(std::time::Instant::now() + std::time::Duration::from_secs(3));

                // Schedule a check after 3 seconds
                Command::perform(
                    async {
                        tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;
                        Message::CheckMessageExpiry
                    },
                    |msg| msg,
                )
            }
            Message::CheckMessageExpiry => {
                if let Some(expires_at) = self.state.success_message_expires_at
                    && std::time::Instant::now() >= expires_at
                {
                    self.state.success_message = None;
                    self.state.success_message_expires_at = None;
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controller = &self.state.controller;
        let title = text("Weekend Range Picker").size(24);

        // the input box, clicking it shows or hides both calendars
        let range_input = button(text(controller.display_text()).size(14))
            .width(Length::Fixed(300.0))
            .style(iced::theme::Button::Secondary)
            .on_press(Message::ToggleCalendars);

        let mut content = column![title, range_input].spacing(15).padding(15);

        if controller.is_visible() {
            let state = controller.state();
            let from_years = self
                .state
                .year_options(state.cursor(Side::From).year());
            let to_years = self.state.year_options(state.cursor(Side::To).year());

            content = content.push(
                row![
                    calendar::create_calendar_view(state, Side::From, from_years),
                    calendar::create_calendar_view(state, Side::To, to_years),
                ]
                .spacing(20),
            );
            content = content
                .push(button(text("Confirm").size(14)).on_press(Message::Confirm));
        }

        let mut preset_row = row![].spacing(8);
        for preset in controller.presets().presets() {
            preset_row = preset_row.push(
                button(text(preset.label()).size(14))
                    .style(iced::theme::Button::Secondary)
                    .on_press(Message::PresetSelected(*preset)),
            );
        }
        content = content.push(preset_row);

        // Display error if any
        if let Some(error) = &self.state.error {
            content = content.push(
                text(format!("Error: {}", error))
                    .size(12)
                    .style(iced::Color::from_rgb(0.8, 0.0, 0.0)),
            );
        }

        // Display success message if any
        if let Some(message) = &self.state.success_message {
            content = content.push(
                text(message)
                    .size(12)
                    .style(iced::Color::from_rgb(0.0, 0.6, 0.0)),
            );
        }

        let weekends = controller.current_weekends();
        if !weekends.is_empty() {
            let mut list = column![].spacing(4);
            for label in weekends.labels() {
                list = list.push(
                    text(label)
                        .size(12)
                        .style(iced::Color::from_rgb(0.8, 0.0, 0.0)),
                );
            }

            content = content.push(
                row![
                    text("Weekends").size(16),
                    button(text("Export").size(14)).on_press(Message::ExportWeekends),
                ]
                .spacing(10),
            );
            content = content.push(scrollable(list).height(Length::Fixed(150.0)));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .into()
    }
}
