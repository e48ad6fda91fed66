//! In-memory regions.
//!
//! These keep whatever the widget last wrote so an immediate-mode host can
//! paint it every frame. Tests read them directly.

use crate::models::grid::GridCell;
use crate::utils::bounds::Bounds;

use super::regions::{ChoiceOption, ChoiceRegion, GridRegion, LabelRegion, PanelRegion, TextRegion};

#[derive(Debug, Clone, Default)]
pub struct RetainedLabel {
    text: String,
}

impl RetainedLabel {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl LabelRegion for RetainedLabel {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

#[derive(Debug, Clone, Default)]
pub struct RetainedGrid {
    cells: Vec<GridCell>,
    rebuild_count: usize,
}

impl RetainedGrid {
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// How many times the cells were replaced wholesale.
    pub fn rebuild_count(&self) -> usize {
        self.rebuild_count
    }

    pub fn selected_days(&self) -> Vec<u32> {
        self.cells
            .iter()
            .filter(|cell| cell.is_selected())
            .map(GridCell::day)
            .collect()
    }
}

impl GridRegion for RetainedGrid {
    fn replace_cells(&mut self, cells: &[GridCell]) {
        self.cells = cells.to_vec();
        self.rebuild_count += 1;
    }

    fn set_cell_selected(&mut self, day: u32, selected: bool) {
        let cell = self
            .cells
            .iter_mut()
            .find(|cell| cell.month_day() == Some(day));
        if let Some(GridCell::Day { flags, .. }) = cell {
            flags.is_selected = selected;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RetainedChoice {
    options: Vec<ChoiceOption>,
    selected: Option<i32>,
}

impl RetainedChoice {
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<i32> {
        self.selected
    }

    pub fn selected_label(&self) -> Option<&str> {
        let value = self.selected?;
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}

impl ChoiceRegion for RetainedChoice {
    fn set_options(&mut self, options: Vec<ChoiceOption>) {
        if let Some(value) = self.selected {
            if !options.iter().any(|option| option.value == value) {
                self.selected = None;
            }
        }
        self.options = options;
    }

    fn select_value(&mut self, value: i32) -> bool {
        if self.options.iter().any(|option| option.value == value) {
            self.selected = Some(value);
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RetainedText {
    value: String,
    invalid: bool,
    required: bool,
}

impl RetainedText {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Editable buffer for hosts that let the user type in place.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.value
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl TextRegion for RetainedText {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    fn is_required(&self) -> bool {
        self.required
    }
}

#[derive(Debug, Clone, Default)]
pub struct RetainedPanel {
    open: bool,
    bounds: Option<Bounds>,
}

impl RetainedPanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Record where the host last drew the widget.
    pub fn set_bounds(&mut self, bounds: Option<Bounds>) {
        self.bounds = bounds;
    }
}

impl PanelRegion for RetainedPanel {
    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}
