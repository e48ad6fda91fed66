// Parameterized tests for date text parsing
// Covers the accepted shapes, calendar validation and canonical output

use month_picker::services::date_text::{canonicalize, parse_date, DateTextError};
use test_case::test_case;

#[test_case("05/03/2023", "05/03/2023"; "canonical input")]
#[test_case(" 5-3-2023 ", "05/03/2023"; "single digits with dashes and padding")]
#[test_case("5.3.2023", "05/03/2023"; "dots")]
#[test_case("\t31/12/1999\n", "31/12/1999"; "surrounding tabs and newline")]
#[test_case("29_02_2000", "29/02/2000"; "leap century")]
#[test_case("1/1/1000", "01/01/1000"; "earliest year")]
fn test_accepted_text(text: &str, canonical: &str) {
    assert_eq!(canonicalize(text).as_deref(), Some(canonical));
}

#[test_case(""; "empty")]
#[test_case("   "; "blank")]
#[test_case("5/3"; "missing year")]
#[test_case("5/3/23"; "two digit year")]
#[test_case("5/3/02023"; "five digit year")]
#[test_case("005/3/2023"; "three digit day")]
#[test_case("5 /3/2023"; "space before separator")]
#[test_case("5/ 3/2023"; "space after separator")]
#[test_case("5 3 2023"; "space separators")]
#[test_case("5--3-2023"; "double separator")]
#[test_case("5/3/2023 x"; "trailing garbage")]
#[test_case("٥/٣/٢٠٢٣"; "non ascii digits")]
fn test_malformed_text(text: &str) {
    assert_eq!(parse_date(text), Err(DateTextError::Malformed));
}

#[test_case("31/02/2024", 31, 2, 2024; "february 31st")]
#[test_case("30/02/2024", 30, 2, 2024; "february 30th")]
#[test_case("29/02/2023", 29, 2, 2023; "february 29th common year")]
#[test_case("29/02/1900", 29, 2, 1900; "february 29th century")]
#[test_case("31/06/2024", 31, 6, 2024; "june 31st")]
#[test_case("0/6/2024", 0, 6, 2024; "day zero")]
#[test_case("10/0/2024", 10, 0, 2024; "month zero")]
#[test_case("10/13/2024", 10, 13, 2024; "month thirteen")]
#[test_case("1/1/0001", 1, 1, 1; "year one")]
#[test_case("01/01/0000", 1, 1, 0; "year zero")]
#[test_case("05/03/0999", 5, 3, 999; "three digit year")]
fn test_invalid_calendar_dates(text: &str, day: u32, month: u32, year: i32) {
    assert_eq!(
        parse_date(text),
        Err(DateTextError::InvalidCalendarDate { day, month, year })
    );
}
