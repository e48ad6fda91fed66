//! Month and year selector population and syncing.

use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::models::calendar_month::DisplayedMonth;
use crate::models::settings::MonthNames;

use super::regions::{ChoiceOption, ChoiceRegion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Month,
    Year,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorKind::Month => write!(f, "month"),
            SelectorKind::Year => write!(f, "year"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("The {kind} selector has no option for {value}")]
    OutOfRange { kind: SelectorKind, value: i32 },
}

/// Twelve entries, values 0..=11.
pub fn month_options(names: MonthNames) -> Vec<ChoiceOption> {
    names
        .months()
        .iter()
        .enumerate()
        .map(|(index, name)| ChoiceOption {
            value: index as i32,
            label: name.to_string(),
        })
        .collect()
}

/// One entry per year of the range.
pub fn year_options(years: RangeInclusive<i32>) -> Vec<ChoiceOption> {
    years
        .map(|year| ChoiceOption {
            value: year,
            label: year.to_string(),
        })
        .collect()
}

/// Point both selectors at `month`. Each selector is tried independently;
/// the first miss is reported.
pub fn reflect_month<C: ChoiceRegion>(
    month_select: &mut C,
    year_select: &mut C,
    month: DisplayedMonth,
) -> Result<(), SelectorError> {
    let month_value = month.month() as i32;
    let month_found = month_select.select_value(month_value);
    let year_found = year_select.select_value(month.year());

    if !month_found {
        return Err(SelectorError::OutOfRange {
            kind: SelectorKind::Month,
            value: month_value,
        });
    }
    if !year_found {
        return Err(SelectorError::OutOfRange {
            kind: SelectorKind::Year,
            value: month.year(),
        });
    }
    Ok(())
}

/// [`reflect_month`], logging a miss instead of returning it.
pub fn sync_selectors<C: ChoiceRegion>(month_select: &mut C, year_select: &mut C, month: DisplayedMonth) {
    if let Err(err) = reflect_month(month_select, year_select, month) {
        log::warn!("Skipping selector sync: {}", err);
    }
}
