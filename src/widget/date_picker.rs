//! Full date picker: calendar plus text field, month/year selectors and a
//! show/hide panel.
//!
//! Every handler runs to completion: the selection is updated first, then
//! the grid is rendered, then the selectors are synced.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::models::calendar_month::DisplayedMonth;
use crate::models::settings::PickerSettings;
use crate::services::date_text::{format_date, parse_date};

use super::calendar::Calendar;
use super::regions::{
    CalendarRegions, ChoiceRegion, GridRegion, LabelRegion, PanelRegion, PickerRegions, TextRegion,
};
use super::selectors::{month_options, sync_selectors, year_options};
use super::visibility::VisibilityToggle;

/// Construction inputs besides the regions.
#[derive(Debug, Clone)]
pub struct PickerOptions {
    /// Highlighted as today; also the default selection.
    pub today: NaiveDate,
    pub initial_selected: Option<NaiveDate>,
    pub settings: PickerSettings,
}

impl PickerOptions {
    pub fn new(settings: PickerSettings) -> Self {
        Self {
            today: Local::now().date_naive(),
            initial_selected: None,
            settings,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_selected(mut self, selected: NaiveDate) -> Self {
        self.initial_selected = Some(selected);
        self
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self::new(PickerSettings::default())
    }
}

/// What a host needs to know about the picker's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerSnapshot {
    pub selected: NaiveDate,
    pub displayed: DisplayedMonth,
    pub text: String,
    pub input_invalid: bool,
    pub is_open: bool,
}

pub struct DatePicker<L, G, C, T, P> {
    calendar: Calendar<L, G>,
    month_select: C,
    year_select: C,
    date_input: T,
    panel: P,
    settings: PickerSettings,
    visibility: VisibilityToggle,
    input_invalid: bool,
}

impl<L, G, C, T, P> DatePicker<L, G, C, T, P>
where
    L: LabelRegion,
    G: GridRegion,
    C: ChoiceRegion,
    T: TextRegion,
    P: PanelRegion,
{
    pub fn new(regions: PickerRegions<L, G, C, T, P>, options: PickerOptions) -> Self {
        let PickerRegions {
            calendar,
            mut month_select,
            mut year_select,
            date_input,
            mut panel,
        } = regions;
        let PickerOptions {
            today,
            initial_selected,
            settings,
        } = options;

        month_select.set_options(month_options(settings.month_names));
        year_select.set_options(year_options(settings.year_range(today.year())));
        panel.set_open(false);

        let calendar = Calendar::new(calendar, today, initial_selected, settings.month_names);

        let mut picker = Self {
            calendar,
            month_select,
            year_select,
            date_input,
            panel,
            settings,
            visibility: VisibilityToggle::default(),
            input_invalid: false,
        };
        picker.adopt_initial_text();
        picker.sync_to_displayed();
        picker
    }

    fn adopt_initial_text(&mut self) {
        let text = self.date_input.value();
        if text.trim().is_empty() {
            let canonical = format_date(self.calendar.selected());
            self.date_input.set_value(&canonical);
            self.set_input_invalid(false);
            return;
        }

        match parse_date(&text) {
            Ok(date) => {
                self.calendar.select_date(date, true);
                self.date_input.set_value(&format_date(date));
                self.set_input_invalid(false);
            }
            Err(err) => {
                log::warn!("Initial text {:?} rejected: {}", text, err);
                self.set_input_invalid(true);
            }
        }
    }

    pub fn calendar(&self) -> &Calendar<L, G> {
        &self.calendar
    }

    pub fn calendar_regions(&self) -> &CalendarRegions<L, G> {
        self.calendar.regions()
    }

    pub fn month_select(&self) -> &C {
        &self.month_select
    }

    pub fn year_select(&self) -> &C {
        &self.year_select
    }

    pub fn date_input(&self) -> &T {
        &self.date_input
    }

    /// Direct access for hosts that edit the text in place before calling
    /// [`DatePicker::on_input_changed`].
    pub fn date_input_mut(&mut self) -> &mut T {
        &mut self.date_input
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn selected(&self) -> NaiveDate {
        self.calendar.selected()
    }

    pub fn displayed(&self) -> DisplayedMonth {
        self.calendar.displayed()
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn input_invalid(&self) -> bool {
        self.input_invalid
    }

    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot {
            selected: self.selected(),
            displayed: self.displayed(),
            text: self.date_input.value(),
            input_invalid: self.input_invalid,
            is_open: self.is_open(),
        }
    }

    // Navigation

    pub fn go_to_previous_month(&mut self) {
        self.calendar.go_to_previous_month();
        self.sync_to_displayed();
    }

    pub fn go_to_next_month(&mut self) {
        self.calendar.go_to_next_month();
        self.sync_to_displayed();
    }

    pub fn jump_to_month(&mut self, month: i32) {
        self.calendar.jump_to_month(month);
        self.sync_to_displayed();
    }

    pub fn jump_to_year(&mut self, year: i32) {
        self.calendar.jump_to_year(year);
        self.sync_to_displayed();
    }

    pub fn go_to_today(&mut self) {
        self.calendar.go_to_today();
        self.sync_to_displayed();
    }

    /// The month selector changed.
    pub fn on_month_selected(&mut self, month: i32) {
        self.jump_to_month(month);
    }

    /// The year selector changed.
    pub fn on_year_selected(&mut self, year: i32) {
        self.jump_to_year(year);
    }

    // Selection

    /// Make `date` the selection and mirror it into the text field.
    ///
    /// The selectors follow the displayed month, which only moves to the
    /// date's month with `reveal_month`.
    pub fn select_date(&mut self, date: NaiveDate, reveal_month: bool) {
        self.calendar.select_date(date, reveal_month);
        self.write_canonical(date);
        self.sync_to_displayed();
    }

    /// A click on a day of the displayed month.
    pub fn on_day_clicked(&mut self, day: u32) -> Option<NaiveDate> {
        let date = self.calendar.on_day_clicked(day)?;
        self.after_click(date);
        Some(date)
    }

    /// A click on grid cell `index`; filler cells are inert.
    pub fn on_cell_clicked(&mut self, index: usize) -> Option<NaiveDate> {
        let date = self.calendar.on_cell_clicked(index)?;
        self.after_click(date);
        Some(date)
    }

    fn after_click(&mut self, date: NaiveDate) {
        self.write_canonical(date);
        self.sync_to_selected();
        if self.settings.close_on_select {
            self.close();
        }
    }

    // Text field

    /// The text changed (keystroke, paste). Valid text is adopted at once;
    /// anything else is left for the user to finish.
    pub fn on_input_changed(&mut self) {
        let text = self.date_input.value();
        match parse_date(&text) {
            Ok(date) => {
                self.write_canonical(date);
                self.calendar.select_date(date, true);
                self.sync_to_selected();
            }
            Err(err) => log::debug!("Ignoring partial input {:?}: {}", text, err),
        }
    }

    /// The text field lost focus.
    pub fn on_input_blur(&mut self) {
        let text = self.date_input.value();
        if text.trim().is_empty() {
            self.set_input_invalid(self.input_required());
            return;
        }

        match parse_date(&text) {
            Ok(date) => {
                self.write_canonical(date);
                if date != self.calendar.selected() {
                    self.calendar.select_date(date, true);
                    self.sync_to_selected();
                }
            }
            Err(err) => {
                log::debug!("Marking input invalid: {}", err);
                self.set_input_invalid(true);
            }
        }
    }

    fn input_required(&self) -> bool {
        self.settings.input_required || self.date_input.is_required()
    }

    fn write_canonical(&mut self, date: NaiveDate) {
        let canonical = format_date(date);
        if self.date_input.value() != canonical {
            self.date_input.set_value(&canonical);
        }
        self.set_input_invalid(false);
    }

    fn set_input_invalid(&mut self, invalid: bool) {
        self.input_invalid = invalid;
        self.date_input.set_invalid(invalid);
    }

    // Visibility

    /// The trigger control was pressed.
    pub fn toggle(&mut self) {
        let open = self.visibility.toggle();
        log::debug!("Picker {}", if open { "opened" } else { "closed" });
        self.panel.set_open(open);
    }

    pub fn open(&mut self) {
        self.visibility.open();
        self.panel.set_open(true);
    }

    pub fn close(&mut self) {
        self.visibility.close();
        self.panel.set_open(false);
    }

    /// A pointer press anywhere in the host, in host coordinates.
    pub fn on_pointer_down(&mut self, point: (f32, f32)) {
        if self.visibility.pointer_down(point, self.panel.bounds()) {
            log::debug!("Picker closed by outside press");
            self.panel.set_open(false);
        }
    }

    // Selector sync

    fn sync_to_displayed(&mut self) {
        sync_selectors(&mut self.month_select, &mut self.year_select, self.calendar.displayed());
    }

    fn sync_to_selected(&mut self) {
        let selected = DisplayedMonth::of(self.calendar.selected());
        sync_selectors(&mut self.month_select, &mut self.year_select, selected);
    }
}
