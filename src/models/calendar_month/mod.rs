//! The month shown by the picker grid.
//!
//! A `DisplayedMonth` is always "day 1 of some month". Month arithmetic
//! goes through [`DisplayedMonth::new`], which accepts any integer month and
//! rolls the year over, so `-1` becomes December of the previous year and
//! `12` becomes January of the next.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Year and zero-based month (0 = January .. 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawMonth")]
pub struct DisplayedMonth {
    year: i32,
    month: u32,
}

/// Deserialized form, normalized through [`DisplayedMonth::new`].
#[derive(Deserialize)]
struct RawMonth {
    year: i32,
    month: i32,
}

impl From<RawMonth> for DisplayedMonth {
    fn from(raw: RawMonth) -> Self {
        Self::new(raw.year, raw.month)
    }
}

impl DisplayedMonth {
    /// Build a displayed month, normalizing out-of-range months into the
    /// adjacent years.
    pub fn new(year: i32, month: i32) -> Self {
        let total_months = i64::from(year) * 12 + i64::from(month);
        Self {
            year: total_months.div_euclid(12) as i32,
            month: total_months.rem_euclid(12) as u32,
        }
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// One-based month, as chrono and the text field use it.
    pub fn month1(&self) -> u32 {
        self.month + 1
    }

    pub fn previous(&self) -> Self {
        self.shifted(-1)
    }

    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    /// Shift by `delta` months, rolling the year at the boundaries.
    pub fn shifted(&self, delta: i32) -> Self {
        Self::new(self.year, self.month as i32 + delta)
    }

    /// Same year, different month (normalized).
    pub fn with_month(&self, month: i32) -> Self {
        Self::new(self.year, month)
    }

    /// Same month, different year.
    pub fn with_year(&self, year: i32) -> Self {
        Self::new(year, self.month as i32)
    }

    /// Day 1 of this month as a fresh date value.
    ///
    /// Returns `None` only for years outside chrono's supported range.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month1(), 1)
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }
}

impl std::fmt::Display for DisplayedMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month1())
    }
}
