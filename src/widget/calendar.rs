//! Display-only month calendar.
//!
//! Owns the displayed month and the selected date and keeps the label and
//! grid regions in step with them. The date picker wraps one of these.

use chrono::{Datelike, NaiveDate};

use crate::models::calendar_month::DisplayedMonth;
use crate::models::grid::MonthGrid;
use crate::models::settings::MonthNames;
use crate::services::date_text::DateTextError;
use crate::services::grid::compute_grid;

use super::regions::{CalendarRegions, GridRegion, LabelRegion};

pub struct Calendar<L, G> {
    regions: CalendarRegions<L, G>,
    month_names: MonthNames,
    today: NaiveDate,
    displayed: DisplayedMonth,
    selected: NaiveDate,
    /// Cells of the latest render; partial selection updates look here only.
    grid: MonthGrid,
}

impl<L: LabelRegion, G: GridRegion> Calendar<L, G> {
    /// Build the calendar and render it once.
    ///
    /// The selection defaults to `today`; either way its month is displayed.
    pub fn new(
        regions: CalendarRegions<L, G>,
        today: NaiveDate,
        initial_selected: Option<NaiveDate>,
        month_names: MonthNames,
    ) -> Self {
        let selected = initial_selected.unwrap_or(today);
        let displayed = DisplayedMonth::of(selected);
        let grid = compute_grid(displayed, selected, today);

        let mut calendar = Self {
            regions,
            month_names,
            today,
            displayed,
            selected,
            grid,
        };
        calendar.render();
        calendar
    }

    pub fn displayed(&self) -> DisplayedMonth {
        self.displayed
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn month_names(&self) -> MonthNames {
        self.month_names
    }

    pub fn regions(&self) -> &CalendarRegions<L, G> {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut CalendarRegions<L, G> {
        &mut self.regions
    }

    /// Caption such as "March 2024".
    pub fn month_year_text(&self) -> String {
        format!(
            "{} {}",
            self.month_names.month(self.displayed.month()),
            self.displayed.year()
        )
    }

    /// Recompute the grid and replace everything in the regions.
    pub fn render(&mut self) {
        self.grid = compute_grid(self.displayed, self.selected, self.today);
        self.regions.days_grid.replace_cells(self.grid.cells());
        let caption = self.month_year_text();
        self.regions.month_year_label.set_text(&caption);
    }

    pub fn go_to_previous_month(&mut self) {
        self.show_month(self.displayed.previous());
    }

    pub fn go_to_next_month(&mut self) {
        self.show_month(self.displayed.next());
    }

    /// Display another month of the same year. Values outside 0..=11 roll
    /// into the adjacent years.
    pub fn jump_to_month(&mut self, month: i32) {
        self.show_month(self.displayed.with_month(month));
    }

    pub fn jump_to_year(&mut self, year: i32) {
        self.show_month(self.displayed.with_year(year));
    }

    /// Display the month containing today. The selection is untouched.
    pub fn go_to_today(&mut self) {
        self.show_month(DisplayedMonth::of(self.today));
    }

    pub fn show_month(&mut self, month: DisplayedMonth) {
        log::debug!("Displaying {}", month);
        self.displayed = month;
        self.render();
    }

    /// Make `date` the selection.
    ///
    /// With `reveal_month` its month is displayed and fully re-rendered.
    /// Otherwise only the selected marker moves, and only when `date` lies
    /// in the displayed month.
    pub fn select_date(&mut self, date: NaiveDate, reveal_month: bool) {
        log::info!("Selected {}", date);
        self.selected = date;

        if reveal_month {
            self.show_month(DisplayedMonth::of(date));
            return;
        }

        if !self.displayed.contains(date) {
            return;
        }

        let day = date.day();
        let previous = self.grid.selected_day();
        if previous == Some(day) {
            return;
        }
        if let Some(previous) = previous {
            self.grid.set_selected(previous, false);
            self.regions.days_grid.set_cell_selected(previous, false);
        }
        if self.grid.set_selected(day, true) {
            self.regions.days_grid.set_cell_selected(day, true);
        }
    }

    /// [`Calendar::select_date`] from a zero-based month, rejecting dates
    /// that do not exist.
    pub fn select_ymd(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        reveal_month: bool,
    ) -> Result<NaiveDate, DateTextError> {
        let date = month
            .checked_add(1)
            .and_then(|month1| NaiveDate::from_ymd_opt(year, month1, day))
            .ok_or(DateTextError::InvalidCalendarDate {
                day,
                month: month.saturating_add(1),
                year,
            })?;
        self.select_date(date, reveal_month);
        Ok(date)
    }

    /// A click on a day of the displayed month. Returns the new selection.
    pub fn on_day_clicked(&mut self, day: u32) -> Option<NaiveDate> {
        let index = self.grid.index_of_day(day)?;
        self.on_cell_clicked(index)
    }

    /// A click on grid cell `index`. Filler cells are inert.
    pub fn on_cell_clicked(&mut self, index: usize) -> Option<NaiveDate> {
        let day = self.grid.day_at(index)?;
        let first = self.displayed.first_day()?;
        let date = first.with_day(day)?;
        self.select_date(date, false);
        Some(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::regions::MockGridRegion;
    use crate::widget::retained::{RetainedGrid, RetainedLabel};
    use mockall::predicate::eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn calendar(selected: NaiveDate) -> Calendar<RetainedLabel, RetainedGrid> {
        Calendar::new(
            CalendarRegions {
                month_year_label: RetainedLabel::default(),
                days_grid: RetainedGrid::default(),
            },
            date(2024, 3, 20),
            Some(selected),
            MonthNames::English,
        )
    }

    #[test]
    fn test_new_renders_selected_month() {
        let cal = calendar(date(2024, 3, 15));
        assert_eq!(cal.displayed(), DisplayedMonth::new(2024, 2));
        assert_eq!(cal.regions().month_year_label.text(), "March 2024");
        assert_eq!(cal.regions().days_grid.cells().len(), 42);
        assert_eq!(cal.regions().days_grid.selected_days(), vec![15]);
    }

    #[test]
    fn test_navigation_keeps_selection() {
        let mut cal = calendar(date(2024, 3, 15));

        cal.go_to_next_month();
        assert_eq!(cal.regions().month_year_label.text(), "April 2024");
        assert!(cal.regions().days_grid.selected_days().is_empty());
        assert_eq!(cal.selected(), date(2024, 3, 15));

        cal.go_to_previous_month();
        cal.go_to_previous_month();
        assert_eq!(cal.regions().month_year_label.text(), "February 2024");
    }

    #[test]
    fn test_jumps() {
        let mut cal = calendar(date(2024, 3, 15));
        cal.jump_to_year(1999);
        assert_eq!(cal.displayed(), DisplayedMonth::new(1999, 2));
        cal.jump_to_month(11);
        assert_eq!(cal.displayed(), DisplayedMonth::new(1999, 11));
        cal.jump_to_month(12);
        assert_eq!(cal.displayed(), DisplayedMonth::new(2000, 0));
        cal.go_to_today();
        assert_eq!(cal.displayed(), DisplayedMonth::new(2024, 2));
    }

    #[test]
    fn test_select_in_displayed_month_moves_flag_only() {
        let mut cal = calendar(date(2024, 3, 10));
        let rebuilds = cal.regions().days_grid.rebuild_count();

        cal.select_date(date(2024, 3, 15), false);

        assert_eq!(cal.regions().days_grid.rebuild_count(), rebuilds);
        assert_eq!(cal.regions().days_grid.selected_days(), vec![15]);
        assert_eq!(cal.grid().selected_day(), Some(15));
    }

    #[test]
    fn test_select_outside_displayed_month_changes_nothing_visible() {
        let mut cal = calendar(date(2024, 3, 10));
        let before = cal.regions().days_grid.cells().to_vec();

        cal.select_date(date(2024, 5, 2), false);

        assert_eq!(cal.selected(), date(2024, 5, 2));
        assert_eq!(cal.regions().days_grid.cells(), &before[..]);
        assert_eq!(cal.displayed(), DisplayedMonth::new(2024, 2));
    }

    #[test]
    fn test_select_with_reveal_displays_month() {
        let mut cal = calendar(date(2024, 3, 10));
        cal.select_date(date(2023, 7, 4), true);
        assert_eq!(cal.displayed(), DisplayedMonth::new(2023, 6));
        assert_eq!(cal.regions().month_year_label.text(), "July 2023");
        assert_eq!(cal.regions().days_grid.selected_days(), vec![4]);
    }

    #[test]
    fn test_select_ymd_rejects_overflow() {
        let mut cal = calendar(date(2024, 3, 10));
        assert!(cal.select_ymd(2024, 1, 30, true).is_err());
        assert_eq!(cal.selected(), date(2024, 3, 10));
        assert_eq!(cal.select_ymd(2024, 1, 29, true), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn test_select_ymd_rejects_out_of_range_month() {
        let mut cal = calendar(date(2024, 3, 10));
        assert_eq!(
            cal.select_ymd(2024, 12, 1, true),
            Err(DateTextError::InvalidCalendarDate { day: 1, month: 13, year: 2024 })
        );
        assert_eq!(
            cal.select_ymd(2024, u32::MAX, 1, true),
            Err(DateTextError::InvalidCalendarDate { day: 1, month: u32::MAX, year: 2024 })
        );
        assert_eq!(cal.selected(), date(2024, 3, 10));
    }

    #[test]
    fn test_cell_clicks() {
        let mut cal = calendar(date(2024, 3, 10));
        // Four leading cells in March 2024
        assert_eq!(cal.on_cell_clicked(0), None);
        assert_eq!(cal.on_cell_clicked(4), Some(date(2024, 3, 1)));
        assert_eq!(cal.on_day_clicked(31), Some(date(2024, 3, 31)));
        assert_eq!(cal.on_day_clicked(32), None);
        assert_eq!(cal.regions().days_grid.selected_days(), vec![31]);
    }

    #[test]
    fn test_partial_update_never_replaces_cells() {
        let mut grid = MockGridRegion::new();
        grid.expect_replace_cells()
            .withf(|cells| cells.len() == 42)
            .times(1)
            .return_const(());
        grid.expect_set_cell_selected()
            .with(eq(10), eq(false))
            .times(1)
            .return_const(());
        grid.expect_set_cell_selected()
            .with(eq(15), eq(true))
            .times(1)
            .return_const(());

        let mut cal = Calendar::new(
            CalendarRegions {
                month_year_label: RetainedLabel::default(),
                days_grid: grid,
            },
            date(2024, 3, 20),
            Some(date(2024, 3, 10)),
            MonthNames::English,
        );

        cal.select_date(date(2024, 3, 15), false);
    }
}
