//! entry point for presentation layers: select dates, apply presets and
//! get notified with the resulting range and its weekends

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::PickerError;
use crate::presets::{Preset, PresetCatalog};
use crate::range::{DateRange, RangeState, Side};
use crate::weekends::{self, WeekendList};

/// source of "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// local calendar date of the machine
    #[default]
    System,
    /// always the given date
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

impl From<Option<NaiveDate>> for Clock {
    fn from(today: Option<NaiveDate>) -> Self {
        today.map_or(Clock::System, Clock::Fixed)
    }
}

/// what observers receive after every committed change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeChange {
    pub range: DateRange,
    pub weekends: WeekendList,
}

impl RangeChange {
    /// `[from, to]` as YYYY-MM-DD, `None` where nothing is selected
    pub fn iso_range(&self) -> [Option<String>; 2] {
        self.range.iso()
    }

    pub fn iso_weekends(&self) -> Vec<String> {
        self.weekends.iso()
    }
}

/// receives every committed range change
pub trait RangeObserver {
    fn range_changed(&mut self, change: &RangeChange);
}

impl<F> RangeObserver for F
where
    F: FnMut(&RangeChange),
{
    fn range_changed(&mut self, change: &RangeChange) {
        self(change)
    }
}

/// reports each change through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl RangeObserver for LogObserver {
    fn range_changed(&mut self, change: &RangeChange) {
        let [from, to] = change.iso_range();
        info!(
            from = from.as_deref().unwrap_or("-"),
            to = to.as_deref().unwrap_or("-"),
            weekends = ?change.iso_weekends(),
            "selected range changed"
        );
    }
}

/// owns the selection and keeps the weekend list in sync with it
pub struct RangeController {
    clock: Clock,
    state: RangeState,
    weekends: WeekendList,
    presets: PresetCatalog,
    visible: bool,
    observer: Option<Box<dyn RangeObserver>>,
}

impl RangeController {
    /// start with today selected on both sides and the calendars hidden
    pub fn new(clock: Clock) -> Self {
        let state = RangeState::new(clock.today());
        let weekends = weekends::derive(&state.range());
        Self {
            clock,
            state,
            weekends,
            presets: PresetCatalog::default(),
            visible: false,
            observer: None,
        }
    }

    pub fn with_presets(mut self, presets: PresetCatalog) -> Self {
        self.presets = presets;
        self
    }

    pub fn with_observer(mut self, observer: impl RangeObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    /// replace the registered observer
    pub fn set_observer(&mut self, observer: impl RangeObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Handle a click on `date` in the calendar of `side`.
    ///
    /// Returns `false` if the click was ignored; nothing is notified then.
    pub fn select_date(&mut self, date: NaiveDate, side: Side) -> bool {
        let today = self.clock.today();
        let changed = match side {
            Side::From => self.state.select_from_date(date, today),
            Side::To => self.state.select_to_date(date, today),
        };

        match changed {
            Some(range) => {
                debug!("{side} date {date} accepted");
                self.commit(range);
                true
            }
            None => false,
        }
    }

    /// apply an offered preset by label
    pub fn apply_preset(&mut self, label: &str) -> Result<DateRange, PickerError> {
        let preset = self.presets.find(label).inspect_err(|e| warn!("{e}"))?;
        Ok(self.apply(preset))
    }

    /// apply a preset evaluated against today, bypassing the selection rules
    pub fn apply(&mut self, preset: Preset) -> DateRange {
        let range = preset.compute(self.clock.today());
        debug!("applying preset {preset}");
        let range = self.state.apply_range(range);
        self.commit(range);
        range
    }

    /// set both endpoints directly, `from` must not be after `to`
    pub fn apply_range(&mut self, from: NaiveDate, to: NaiveDate) -> Result<DateRange, PickerError> {
        let range = DateRange::new(Some(from), Some(to))?;
        let range = self.state.apply_range(range);
        self.commit(range);
        Ok(range)
    }

    /// show or hide the calendars, returns the new visibility
    pub fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// browse to another month (zero-based) on one side
    pub fn set_cursor_month(&mut self, side: Side, month: u32) -> Result<(), PickerError> {
        self.state.set_month(side, month).map(|_| ())
    }

    /// browse to another year on one side
    pub fn set_cursor_year(&mut self, side: Side, year: i32) -> Result<(), PickerError> {
        self.state.set_year(side, year).map(|_| ())
    }

    pub fn current_range(&self) -> DateRange {
        self.state.range()
    }

    pub fn current_weekends(&self) -> &WeekendList {
        &self.weekends
    }

    /// read access for renderers: cursors and per-day marks
    pub fn state(&self) -> &RangeState {
        &self.state
    }

    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    pub fn snapshot(&self) -> RangeChange {
        RangeChange {
            range: self.state.range(),
            weekends: self.weekends.clone(),
        }
    }

    /// text for the picker input, e.g. "2024-03-07 - 2024-03-13"
    pub fn display_text(&self) -> String {
        self.state.range().to_string()
    }

    fn commit(&mut self, range: DateRange) {
        self.weekends = weekends::derive(&range);

        if let Some(observer) = self.observer.as_mut() {
            let change = RangeChange {
                range,
                weekends: self.weekends.clone(),
            };
            observer.range_changed(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn iso(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    /// controller on a fixed day that records every notification
    fn recording_controller(today: NaiveDate) -> (RangeController, Rc<RefCell<Vec<RangeChange>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let controller = RangeController::new(Clock::Fixed(today))
            .with_observer(move |change: &RangeChange| sink.borrow_mut().push(change.clone()));
        (controller, seen)
    }

    #[test]
    fn test_new_controller() {
        let controller = RangeController::new(Clock::Fixed(date(2024, 3, 9)));

        assert_eq!(controller.current_range(), DateRange::single(date(2024, 3, 9)));
        assert_eq!(&**controller.current_weekends(), &[date(2024, 3, 9)]);
        assert!(!controller.is_visible());
        assert_eq!(controller.display_text(), "2024-03-09 - 2024-03-09");
    }

    #[test]
    fn test_clock_from_option() {
        assert_eq!(Clock::from(None), Clock::System);
        assert_eq!(
            Clock::from(Some(date(2024, 3, 1))),
            Clock::Fixed(date(2024, 3, 1))
        );
    }

    #[test]
    fn test_select_scenario() {
        let (mut controller, seen) = recording_controller(date(2024, 3, 1));

        assert!(controller.select_date(date(2024, 3, 11), Side::From));
        assert_eq!(controller.current_range(), DateRange::single(date(2024, 3, 11)));
        assert!(controller.current_weekends().is_empty());

        assert!(controller.select_date(date(2024, 3, 15), Side::To));
        assert_eq!(controller.current_range().to(), Some(date(2024, 3, 15)));
        assert!(controller.current_weekends().is_empty());

        assert!(controller.select_date(date(2024, 3, 18), Side::To));
        assert_eq!(
            controller.current_weekends().iso(),
            iso(&["2024-03-16", "2024-03-17"])
        );

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen[2].iso_range(),
            [Some("2024-03-11".to_string()), Some("2024-03-18".to_string())]
        );
        assert_eq!(seen[2].iso_weekends(), iso(&["2024-03-16", "2024-03-17"]));
    }

    #[test]
    fn test_notification_carries_range_after_change() {
        let (mut controller, seen) = recording_controller(date(2024, 3, 1));

        controller.select_date(date(2024, 3, 4), Side::To);

        let seen = seen.borrow();
        assert_eq!(seen[0].range, controller.current_range());
        assert_eq!(seen[0].iso_weekends(), iso(&["2024-03-02", "2024-03-03"]));
    }

    #[test]
    fn test_ignored_clicks_do_not_notify() {
        let (mut controller, seen) = recording_controller(date(2024, 3, 1));
        let before = controller.snapshot();

        assert!(!controller.select_date(date(2024, 3, 2), Side::From));
        assert!(!controller.select_date(date(2024, 3, 3), Side::To));
        assert!(!controller.select_date(date(2024, 2, 28), Side::To));

        assert_eq!(controller.snapshot(), before);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_reclick_from_deselects() {
        let (mut controller, seen) = recording_controller(date(2024, 3, 1));

        assert!(controller.select_date(date(2024, 3, 1), Side::From));

        assert_eq!(controller.current_range(), DateRange::empty());
        assert!(controller.current_weekends().is_empty());
        assert_eq!(seen.borrow()[0].iso_range(), [None, None]);
        assert_eq!(controller.display_text(), " - ");
    }

    #[test]
    fn test_to_before_from_is_rejected() {
        let mut controller = RangeController::new(Clock::Fixed(date(2024, 3, 1)));
        controller.apply_range(date(2024, 3, 4), date(2024, 3, 10)).unwrap();
        controller.select_date(date(2024, 3, 11), Side::From);
        assert_eq!(controller.current_range().from(), Some(date(2024, 3, 11)));
        let to = controller.current_range().to();

        assert!(!controller.select_date(date(2024, 3, 5), Side::To));
        assert_eq!(controller.current_range().to(), to);
    }

    #[test]
    fn test_last_7_days_preset() {
        let (mut controller, seen) = recording_controller(date(2024, 3, 13));

        let range = controller.apply_preset("Last 7 Days").unwrap();

        assert_eq!(range.from(), Some(date(2024, 3, 7)));
        assert_eq!(range.to(), Some(date(2024, 3, 13)));
        assert_eq!(
            controller.current_weekends().iso(),
            iso(&["2024-03-09", "2024-03-10"])
        );
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_applying_preset_twice_is_idempotent() {
        let (mut controller, seen) = recording_controller(date(2024, 3, 13));

        for preset in Preset::ALL {
            controller.apply(preset);
            let first = controller.snapshot();
            controller.apply(preset);
            assert_eq!(controller.snapshot(), first);
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 10);
        assert!(seen.chunks(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_preset_may_start_on_weekend() {
        let mut controller = RangeController::new(Clock::Fixed(date(2024, 3, 13)));

        controller.apply(Preset::NextWeek);

        assert_eq!(controller.current_range().from(), Some(date(2024, 3, 17)));
        assert_eq!(controller.current_weekends().iso(), iso(&["2024-03-17"]));
    }

    #[test]
    fn test_unknown_or_disabled_preset() {
        let mut controller = RangeController::new(Clock::Fixed(date(2024, 3, 13)))
            .with_presets(PresetCatalog::new(&[Preset::ThisMonth]));
        let before = controller.snapshot();

        assert!(matches!(
            controller.apply_preset("Next Year"),
            Err(PickerError::UnknownPreset(_))
        ));
        assert!(matches!(
            controller.apply_preset("Last Month"),
            Err(PickerError::UnknownPreset(_))
        ));
        assert_eq!(controller.snapshot(), before);

        controller.apply_preset("This Month").unwrap();
        assert_eq!(controller.current_weekends().len(), 10);
    }

    #[test]
    fn test_apply_range_rejects_inverted() {
        let mut controller = RangeController::new(Clock::Fixed(date(2024, 3, 13)));

        let result = controller.apply_range(date(2024, 3, 20), date(2024, 3, 10));

        assert!(matches!(result, Err(PickerError::InvertedRange { .. })));
        assert_eq!(controller.current_range(), DateRange::single(date(2024, 3, 13)));
    }

    #[test]
    fn test_toggle_visible_keeps_range() {
        let (mut controller, seen) = recording_controller(date(2024, 3, 13));
        let before = controller.snapshot();

        assert!(controller.toggle_visible());
        assert!(!controller.toggle_visible());
        controller.toggle_visible();
        controller.hide();

        assert!(!controller.is_visible());
        assert_eq!(controller.snapshot(), before);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_cursor_navigation_does_not_notify() {
        let (mut controller, seen) = recording_controller(date(2024, 3, 13));
        let before = controller.snapshot();

        controller.set_cursor_month(Side::To, 10).unwrap();
        controller.set_cursor_year(Side::From, 2030).unwrap();
        assert!(controller.set_cursor_month(Side::From, 12).is_err());

        assert_eq!(controller.state().cursor(Side::From).year(), 2030);
        assert_eq!(controller.snapshot(), before);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_log_observer_accepts_changes() {
        let mut controller =
            RangeController::new(Clock::Fixed(date(2024, 3, 13))).with_observer(LogObserver);

        assert!(controller.select_date(date(2024, 3, 14), Side::To));
    }
}
