//! Grid cell model for the month view.
//!
//! A rendered month is always 42 cells (six Monday-first weeks): filler days
//! from the previous month, every day of the displayed month, then filler
//! days from the next month.

use serde::{Deserialize, Serialize};

use crate::models::calendar_month::DisplayedMonth;

/// Number of cells in every rendered month.
pub const GRID_CELL_COUNT: usize = 42;

/// Number of columns (days per week).
pub const GRID_COLUMNS: usize = 7;

/// Presentation markers of a real day cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayFlags {
    pub is_today: bool,
    pub is_selected: bool,
    pub is_weekend: bool,
}

/// One slot of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridCell {
    /// Filler day from the previous month.
    Leading { day: u32 },
    /// A day of the displayed month.
    Day { day: u32, flags: DayFlags },
    /// Filler day from the next month.
    Trailing { day: u32 },
}

impl GridCell {
    /// Day number printed in the cell.
    pub fn day(&self) -> u32 {
        match *self {
            GridCell::Leading { day } | GridCell::Day { day, .. } | GridCell::Trailing { day } => {
                day
            }
        }
    }

    /// Day number when the cell belongs to the displayed month.
    pub fn month_day(&self) -> Option<u32> {
        match *self {
            GridCell::Day { day, .. } => Some(day),
            _ => None,
        }
    }

    pub fn flags(&self) -> Option<DayFlags> {
        match *self {
            GridCell::Day { flags, .. } => Some(flags),
            _ => None,
        }
    }

    pub fn is_filler(&self) -> bool {
        !matches!(self, GridCell::Day { .. })
    }

    pub fn is_selected(&self) -> bool {
        self.flags().map_or(false, |f| f.is_selected)
    }
}

/// The cells of one render, tied to the month they were computed for.
///
/// Day lookups only ever search these cells, never a previous render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    month: DisplayedMonth,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    pub(crate) fn new(month: DisplayedMonth, cells: Vec<GridCell>) -> Self {
        debug_assert_eq!(cells.len(), GRID_CELL_COUNT);
        Self { month, cells }
    }

    pub fn month(&self) -> DisplayedMonth {
        self.month
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cells grouped into weeks of seven.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn leading_count(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, GridCell::Leading { .. }))
            .count()
    }

    pub fn trailing_count(&self) -> usize {
        self.cells
            .iter()
            .rev()
            .take_while(|cell| matches!(cell, GridCell::Trailing { .. }))
            .count()
    }

    /// Real days of the displayed month, in order.
    pub fn day_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|cell| !cell.is_filler())
    }

    /// Grid index of the given day of the displayed month.
    pub fn index_of_day(&self, day: u32) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.month_day() == Some(day))
    }

    /// Day of the displayed month at `index`, `None` for filler cells.
    pub fn day_at(&self, index: usize) -> Option<u32> {
        self.cells.get(index).and_then(GridCell::month_day)
    }

    /// Day currently carrying the selected flag, if any.
    pub fn selected_day(&self) -> Option<u32> {
        self.day_cells()
            .find(|cell| cell.is_selected())
            .and_then(GridCell::month_day)
    }

    /// Set or clear the selected flag on one day. Returns false when the day
    /// is not part of this render.
    pub fn set_selected(&mut self, day: u32, selected: bool) -> bool {
        let Some(index) = self.index_of_day(day) else {
            return false;
        };
        if let GridCell::Day { flags, .. } = &mut self.cells[index] {
            flags.is_selected = selected;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> MonthGrid {
        let mut cells = vec![GridCell::Leading { day: 30 }, GridCell::Leading { day: 31 }];
        for day in 1..=30 {
            cells.push(GridCell::Day {
                day,
                flags: DayFlags {
                    is_selected: day == 10,
                    ..DayFlags::default()
                },
            });
        }
        let mut next = 1;
        while cells.len() < GRID_CELL_COUNT {
            cells.push(GridCell::Trailing { day: next });
            next += 1;
        }
        MonthGrid::new(DisplayedMonth::new(2024, 3), cells)
    }

    #[test]
    fn test_counts() {
        let grid = sample_grid();
        assert_eq!(grid.leading_count(), 2);
        assert_eq!(grid.day_cells().count(), 30);
        assert_eq!(grid.trailing_count(), 10);
        assert_eq!(grid.weeks().count(), 6);
    }

    #[test]
    fn test_lookups_ignore_filler_cells() {
        let grid = sample_grid();
        assert_eq!(grid.index_of_day(1), Some(2));
        assert_eq!(grid.day_at(0), None);
        assert_eq!(grid.day_at(2), Some(1));
        assert_eq!(grid.day_at(41), None);
        assert_eq!(grid.day_at(99), None);
    }

    #[test]
    fn test_set_selected_moves_flag() {
        let mut grid = sample_grid();
        assert_eq!(grid.selected_day(), Some(10));

        assert!(grid.set_selected(10, false));
        assert!(grid.set_selected(20, true));
        assert_eq!(grid.selected_day(), Some(20));

        assert!(!grid.set_selected(31, true));
    }
}
