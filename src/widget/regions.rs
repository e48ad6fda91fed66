//! Region handles a host hands to the widgets.
//!
//! A host owns the actual presentation (egui, a terminal, a test double).
//! It passes one handle per sub-region into the constructor; the widget
//! writes to them and the host forwards its input events (button clicks,
//! keystrokes, focus loss, pointer presses) to the widget's methods.

use serde::{Deserialize, Serialize};

use crate::models::grid::GridCell;
use crate::utils::bounds::Bounds;

/// The "Month Year" caption above the grid.
pub trait LabelRegion {
    fn set_text(&mut self, text: &str);
}

/// The container receiving the 42 day cells.
#[cfg_attr(test, mockall::automock)]
pub trait GridRegion {
    /// Replace every previous cell with `cells`.
    fn replace_cells(&mut self, cells: &[GridCell]);

    /// Toggle the selected marker of one day of the current render.
    fn set_cell_selected(&mut self, day: u32, selected: bool);
}

/// One entry of a choice control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: i32,
    pub label: String,
}

/// A dropdown-like control (month or year selector).
pub trait ChoiceRegion {
    fn set_options(&mut self, options: Vec<ChoiceOption>);

    /// Make the option carrying `value` current. Returns false, leaving the
    /// current selection alone, when no such option exists.
    fn select_value(&mut self, value: i32) -> bool;
}

/// The text field bound to the selected date.
pub trait TextRegion {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn set_invalid(&mut self, invalid: bool);

    /// Whether an empty field should count as invalid.
    fn is_required(&self) -> bool {
        false
    }
}

/// The show/hide panel holding the grid.
pub trait PanelRegion {
    fn set_open(&mut self, open: bool);

    /// Area covered by the widget (trigger included), if the host knows it.
    fn bounds(&self) -> Option<Bounds>;
}

/// Handles needed by the display-only calendar.
pub struct CalendarRegions<L, G> {
    pub month_year_label: L,
    pub days_grid: G,
}

/// Handles needed by the full date picker.
pub struct PickerRegions<L, G, C, T, P> {
    pub calendar: CalendarRegions<L, G>,
    pub month_select: C,
    pub year_select: C,
    pub date_input: T,
    pub panel: P,
}
