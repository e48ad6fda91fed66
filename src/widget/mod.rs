// Headless picker widgets
// Hosts supply region handles and forward input events

pub mod calendar;
pub mod date_picker;
pub mod regions;
pub mod retained;
pub mod selectors;
pub mod visibility;

pub use calendar::Calendar;
pub use date_picker::{DatePicker, PickerOptions, PickerSnapshot};
pub use regions::{
    CalendarRegions, ChoiceOption, ChoiceRegion, GridRegion, LabelRegion, PanelRegion,
    PickerRegions, TextRegion,
};
pub use retained::{RetainedChoice, RetainedGrid, RetainedLabel, RetainedPanel, RetainedText};

/// A picker whose regions are all retained in memory.
pub type RetainedDatePicker =
    DatePicker<RetainedLabel, RetainedGrid, RetainedChoice, RetainedText, RetainedPanel>;

/// Retained regions with an optional initial text.
pub fn retained_regions(
    initial_text: &str,
) -> PickerRegions<RetainedLabel, RetainedGrid, RetainedChoice, RetainedText, RetainedPanel> {
    PickerRegions {
        calendar: CalendarRegions {
            month_year_label: RetainedLabel::default(),
            days_grid: RetainedGrid::default(),
        },
        month_select: RetainedChoice::default(),
        year_select: RetainedChoice::default(),
        date_input: RetainedText::with_value(initial_text),
        panel: RetainedPanel::default(),
    }
}
