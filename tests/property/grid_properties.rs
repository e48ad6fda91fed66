// Property-based tests for the grid engine and the date text format
// Checks invariants over random months and dates

use chrono::{Datelike, NaiveDate, Weekday};
use month_picker::models::calendar_month::DisplayedMonth;
use month_picker::models::grid::GridCell;
use month_picker::services::date_text::{format_date, parse_date};
use month_picker::services::grid::compute_grid;
use proptest::prelude::*;

fn gregorian_days(year: i32, month1: u32) -> u32 {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    match month1 {
        2 if leap => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

proptest! {
    /// Property: every month renders exactly 42 cells
    #[test]
    fn prop_grid_always_has_42_cells(year in 1600..2600i32, month in -24..36i32) {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let grid = compute_grid(DisplayedMonth::new(year, month), today, today);
        prop_assert_eq!(grid.cells().len(), 42);
    }

    /// Property: real-day cells match the Gregorian month length, in order
    #[test]
    fn prop_day_cells_match_month_length(year in 1600..2600i32, month0 in 0..12u32) {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let grid = compute_grid(DisplayedMonth::new(year, month0 as i32), today, today);

        let days: Vec<u32> = grid.cells().iter().filter_map(GridCell::month_day).collect();
        let expected: Vec<u32> = (1..=gregorian_days(year, month0 + 1)).collect();
        prop_assert_eq!(days, expected);
    }

    /// Property: leading cells equal the Monday-first weekday of day 1
    #[test]
    fn prop_leading_cells_follow_first_weekday(year in 1600..2600i32, month0 in 0..12u32) {
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
        let grid = compute_grid(DisplayedMonth::of(first), today, today);

        let expected = match first.weekday() {
            Weekday::Mon => 0,
            Weekday::Sun => 6,
            other => other.num_days_from_monday() as usize,
        };
        prop_assert_eq!(grid.leading_count(), expected);
    }

    /// Property: at most one cell is selected, and only when the selection is displayed
    #[test]
    fn prop_selected_flag_matches_selection(
        year in 1900..2100i32,
        month0 in 0..12u32,
        offset in -60..60i64,
    ) {
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
        let selected = first + chrono::Duration::days(offset);
        let grid = compute_grid(DisplayedMonth::of(first), selected, first);

        let flagged: Vec<u32> = grid
            .day_cells()
            .filter(|c| c.is_selected())
            .map(GridCell::day)
            .collect();
        if DisplayedMonth::of(first).contains(selected) {
            prop_assert_eq!(flagged, vec![selected.day()]);
        } else {
            prop_assert!(flagged.is_empty());
        }
    }

    /// Property: formatting then parsing gives back the same date from year 1000 on
    #[test]
    fn prop_format_parse_round_trip(days in 0..3_652_425i64) {
        let date = NaiveDate::from_ymd_opt(0, 1, 1).unwrap() + chrono::Duration::days(days);
        prop_assume!(date.year() <= 9999);
        let reparsed = parse_date(&format_date(date));
        if date.year() >= 1000 {
            prop_assert_eq!(reparsed, Ok(date));
        } else {
            prop_assert!(reparsed.is_err());
        }
    }

    /// Property: any accepted text reformats to a canonical string that parses identically
    #[test]
    fn prop_canonical_form_is_idempotent(
        day in 1..=31u32,
        month in 1..=12u32,
        year in 0..=9999i32,
        sep in "[-/. ]",
        pad in proptest::bool::ANY,
    ) {
        let text = if pad {
            format!("{:02}{sep}{:02}{sep}{:04}", day, month, year)
        } else {
            format!("{}{sep}{}{sep}{:04}", day, month, year)
        };
        if let Ok(date) = parse_date(&text) {
            let canonical = format_date(date);
            prop_assert_eq!(parse_date(&canonical), Ok(date));
            prop_assert_eq!(format_date(parse_date(&canonical).unwrap()), canonical);
            prop_assert_eq!((date.day(), date.month(), date.year()), (day, month, year));
        } else {
            prop_assert!(sep == " " || year < 1000 || day > gregorian_days(year, month));
        }
    }
}
