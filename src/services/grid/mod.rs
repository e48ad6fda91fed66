//! Month grid layout.
//!
//! Computes the 42 Monday-first cells shown for a displayed month. The
//! computation is total: any `DisplayedMonth` inside chrono's year range
//! produces a full grid.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::calendar_month::DisplayedMonth;
use crate::models::grid::{DayFlags, GridCell, MonthGrid, GRID_CELL_COUNT};

/// Day count used for months chrono cannot represent.
const FALLBACK_DAY_COUNT: u32 = 30;

/// Number of days in a month (0-based), found as the day before day 1 of
/// the following month.
pub fn days_in_month(month: DisplayedMonth) -> u32 {
    let last = month
        .next()
        .first_day()
        .and_then(|first_of_next| first_of_next.pred_opt());
    match last {
        Some(last) => last.day(),
        None => {
            log::warn!(
                "Cannot count days of {}: year out of range, assuming {}",
                month,
                FALLBACK_DAY_COUNT
            );
            FALLBACK_DAY_COUNT
        }
    }
}

/// Weekday of `date` with Monday = 0 .. Sunday = 6.
pub fn monday_first_weekday(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Lay out the grid for `displayed`, flagging `today` and `selected`.
pub fn compute_grid(displayed: DisplayedMonth, selected: NaiveDate, today: NaiveDate) -> MonthGrid {
    let mut cells = Vec::with_capacity(GRID_CELL_COUNT);

    let Some(first_of_month) = displayed.first_day() else {
        log::warn!("Cannot lay out {}: year out of range", displayed);
        return filler_grid(displayed);
    };

    let day_count = days_in_month(displayed);
    let previous_day_count = days_in_month(displayed.previous());
    let leading = monday_first_weekday(first_of_month);

    for offset in (0..leading).rev() {
        cells.push(GridCell::Leading {
            day: previous_day_count - offset,
        });
    }

    for (date, day) in first_of_month.iter_days().zip(1..=day_count) {
        cells.push(GridCell::Day {
            day,
            flags: DayFlags {
                is_today: date == today,
                is_selected: date == selected,
                is_weekend: is_weekend(date),
            },
        });
    }

    let mut next_day = 1;
    while cells.len() < GRID_CELL_COUNT {
        cells.push(GridCell::Trailing { day: next_day });
        next_day += 1;
    }

    log::debug!(
        "Laid out {}: {} leading, {} days, {} trailing",
        displayed,
        leading,
        day_count,
        GRID_CELL_COUNT as u32 - leading - day_count
    );

    MonthGrid::new(displayed, cells)
}

/// All-trailing grid for months chrono cannot represent.
fn filler_grid(displayed: DisplayedMonth) -> MonthGrid {
    let cells = (1..=GRID_CELL_COUNT as u32)
        .map(|day| GridCell::Trailing { day })
        .collect();
    MonthGrid::new(displayed, cells)
}
