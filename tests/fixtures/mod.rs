// Test fixtures - reusable test data
// Provides consistent dates and pickers across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use month_picker::models::settings::PickerSettings;
use month_picker::widget::{retained_regions, DatePicker, PickerOptions, RetainedDatePicker};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, March 20 2024 - "today" in every fixture picker
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    /// Friday, March 1 2024
    pub fn march_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Picker with retained regions, `today()` as today and the given text.
pub fn picker(initial_text: &str) -> RetainedDatePicker {
    picker_with(initial_text, PickerSettings::default())
}

pub fn picker_with(initial_text: &str, settings: PickerSettings) -> RetainedDatePicker {
    DatePicker::new(
        retained_regions(initial_text),
        PickerOptions::new(settings).with_today(dates::today()),
    )
}
