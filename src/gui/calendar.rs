use chrono::{Datelike, NaiveDate};
use iced::widget::{button, column, container, pick_list, row, text};
use iced::{Color, Element, Length, Theme};
use std::fmt;

use super::Message;
use crate::dates::day_of_week;
use crate::range::{DayMarks, MonthCursor, RangeState, Side};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// entry of the month dropdown, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthOption(pub u32);

impl fmt::Display for MonthOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = MONTH_NAMES.get(self.0 as usize).copied().unwrap_or("?");
        f.write_str(name)
    }
}

pub fn month_options() -> Vec<MonthOption> {
    (0..12).map(MonthOption).collect()
}

/// weeks of the displayed month, Sunday first, padded with `None`
pub fn month_grid(cursor: &MonthCursor) -> Vec<[Option<NaiveDate>; 7]> {
    let mut weeks = Vec::new();
    let mut week = [None; 7];

    for day in cursor.days() {
        let column = day_of_week(&day) as usize;
        week[column] = Some(day);
        if column == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }

    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }

    weeks
}

/// Create one calendar with month/year dropdowns and a clickable day grid
pub fn create_calendar_view<'a>(
    state: &RangeState,
    side: Side,
    years: Vec<i32>,
) -> Element<'a, Message> {
    let cursor = state.cursor(side);
    let title = match side {
        Side::From => "From Date",
        Side::To => "To Date",
    };

    let month_picker = pick_list(
        month_options(),
        Some(MonthOption(cursor.month())),
        move |month: MonthOption| Message::MonthSelected(side, month.0),
    )
    .width(Length::Fill);

    let year_picker = pick_list(years, Some(cursor.year()), move |year: i32| {
        Message::YearSelected(side, year)
    })
    .width(Length::Fill);

    let mut header_row = row![];
    for name in WEEKDAY_HEADERS {
        header_row = header_row.push(
            container(
                text(name)
                    .size(12)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
            )
            .padding(3)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(HeaderStyle))),
        );
    }

    let mut rows: Vec<Element<'a, Message>> = vec![
        text(title).size(16).into(),
        row![month_picker, year_picker].spacing(5).into(),
        header_row.spacing(1).into(),
    ];

    for week in month_grid(&cursor) {
        let mut week_row = row![];
        for day in week {
            week_row = week_row.push(match day {
                Some(date) => day_cell(date, state.day_marks(&date, side), side),
                None => container(text("")).width(Length::Fill).into(),
            });
        }
        rows.push(week_row.spacing(1).into());
    }

    column(rows).spacing(2).width(Length::Fixed(280.0)).into()
}

fn day_cell<'a>(date: NaiveDate, marks: DayMarks, side: Side) -> Element<'a, Message> {
    let label = text(date.day())
        .size(12)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let cell = button(label)
        .width(Length::Fill)
        .padding(3)
        .style(iced::theme::Button::Custom(Box::new(DayStyle { marks })));

    // days before the start cannot be picked as end
    if marks.disabled {
        cell.into()
    } else {
        cell.on_press(Message::DaySelected(date, side)).into()
    }
}

// Custom style for the weekday header
pub struct HeaderStyle;

impl container::StyleSheet for HeaderStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Color::from_rgb(0.9, 0.9, 0.9).into()),
            ..Default::default()
        }
    }
}

// Custom style for day cells
pub struct DayStyle {
    marks: DayMarks,
}

impl DayStyle {
    fn text_color(&self) -> Color {
        if self.marks.disabled {
            Color::from_rgb(0.6, 0.6, 0.6)
        } else if self.marks.in_range {
            Color::WHITE
        } else if self.marks.weekend {
            Color::from_rgb(0.8, 0.0, 0.0)
        } else {
            Color::BLACK
        }
    }

    fn background(&self, hovered: bool) -> Color {
        if self.marks.in_range {
            Color::from_rgb(0.05, 0.43, 0.99)
        } else if hovered && !self.marks.disabled {
            Color::from_rgb(0.9, 0.9, 0.9)
        } else {
            Color::TRANSPARENT
        }
    }

    fn border(&self) -> iced::Border {
        iced::Border {
            radius: 2.0.into(),
            width: if self.marks.endpoint { 2.0 } else { 0.0 },
            color: Color::from_rgb(1.0, 0.76, 0.03),
        }
    }
}

impl button::StyleSheet for DayStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(self.background(false).into()),
            text_color: self.text_color(),
            border: self.border(),
            shadow_offset: iced::Vector::default(),
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(self.background(true).into()),
            text_color: self.text_color(),
            border: self.border(),
            shadow_offset: iced::Vector::default(),
            ..Default::default()
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}
