//! Picker settings.
//!
//! Loaded from TOML by `services::settings::SettingsService`; every field has
//! a default so a partial file is fine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest year offered by the year selector unless configured otherwise.
pub const DEFAULT_MIN_YEAR: i32 = 1900;

/// Years past the current one offered by default.
pub const DEFAULT_YEARS_AHEAD: i32 = 10;

/// Fixed month/weekday name tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthNames {
    #[default]
    English,
    French,
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const FRENCH_MONTHS: [&str; 12] = [
    "Janvier", "Février", "Mars", "Avril", "Mai", "Juin",
    "Juillet", "Août", "Septembre", "Octobre", "Novembre", "Décembre",
];

const ENGLISH_WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

const FRENCH_WEEKDAYS: [&str; 7] = ["Lu", "Ma", "Me", "Je", "Ve", "Sa", "Di"];

impl MonthNames {
    /// Month names indexed by zero-based month.
    pub fn months(&self) -> &'static [&'static str; 12] {
        match self {
            MonthNames::English => &ENGLISH_MONTHS,
            MonthNames::French => &FRENCH_MONTHS,
        }
    }

    /// Short weekday headers, Monday first.
    pub fn weekdays(&self) -> &'static [&'static str; 7] {
        match self {
            MonthNames::English => &ENGLISH_WEEKDAYS,
            MonthNames::French => &FRENCH_WEEKDAYS,
        }
    }

    /// Name of a zero-based month. Out-of-range values wrap.
    pub fn month(&self, month0: u32) -> &'static str {
        self.months()[(month0 % 12) as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// First year offered by the year selector.
    pub min_year: i32,
    /// Last year offered; `None` means ten years past today.
    pub max_year: Option<i32>,
    pub month_names: MonthNames,
    /// An empty text field counts as invalid on blur.
    pub input_required: bool,
    /// Close the panel after a day is clicked.
    pub close_on_select: bool,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: None,
            month_names: MonthNames::default(),
            input_required: false,
            close_on_select: false,
        }
    }
}

impl PickerSettings {
    /// Inclusive year range offered by the year selector.
    pub fn year_range(&self, current_year: i32) -> std::ops::RangeInclusive<i32> {
        let max_year = self
            .max_year
            .unwrap_or(current_year + DEFAULT_YEARS_AHEAD);
        self.min_year..=max_year
    }

    pub fn validate(&self, current_year: i32) -> Result<(), SettingsValidationError> {
        let range = self.year_range(current_year);
        if range.start() > range.end() {
            return Err(SettingsValidationError::EmptyYearRange {
                min_year: *range.start(),
                max_year: *range.end(),
            });
        }
        Ok(())
    }
}

/// Validation errors for PickerSettings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    #[error("Year range is empty: min_year {min_year} is after max_year {max_year}")]
    EmptyYearRange { min_year: i32, max_year: i32 },
}
