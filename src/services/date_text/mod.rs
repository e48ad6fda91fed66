//! Text form of a picked date.
//!
//! The canonical form is `DD/MM/YYYY`. Parsing is more lenient: one or two
//! digit day and month, any single non-digit separator, four digit year,
//! surrounding whitespace ignored.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Why a piece of text is not a date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTextError {
    /// Not three numeric groups in the expected shape.
    #[error("Expected a date like DD/MM/YYYY")]
    Malformed,
    /// Right shape, but the day/month/year triple is not a real date.
    #[error("{day:02}/{month:02}/{year} is not a calendar date")]
    InvalidCalendarDate { day: u32, month: u32, year: i32 },
}

/// Smallest year accepted from text.
pub const MIN_YEAR: i32 = 1000;

/// Canonical `DD/MM/YYYY` rendering.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Parse user text into a date.
pub fn parse_date(text: &str) -> Result<NaiveDate, DateTextError> {
    let mut scanner = Scanner::new(text.trim());

    let day = scanner.digits(1, 2)?;
    scanner.separator()?;
    let month = scanner.digits(1, 2)?;
    scanner.separator()?;
    let year = scanner.digits(4, 4)?;
    scanner.finish()?;

    let year = year as i32;
    let invalid = DateTextError::InvalidCalendarDate { day, month, year };
    // Years below 1000 would not format back into four digits
    if !(1..=12).contains(&month) || year < MIN_YEAR {
        return Err(invalid);
    }

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid.clone())?;
    if (date.day(), date.month(), date.year()) != (day, month, year) {
        return Err(invalid);
    }
    Ok(date)
}

/// Canonical rewrite of valid text; `None` when the text does not parse.
pub fn canonicalize(text: &str) -> Option<String> {
    parse_date(text).ok().map(format_date)
}

struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }

    fn digits(&mut self, min: usize, max: usize) -> Result<u32, DateTextError> {
        let mut value = 0u32;
        let mut count = 0;
        while count < max {
            match self.chars.peek().and_then(|c| c.to_digit(10)) {
                Some(digit) => {
                    value = value * 10 + digit;
                    count += 1;
                    self.chars.next();
                }
                None => break,
            }
        }
        if count < min {
            return Err(DateTextError::Malformed);
        }
        Ok(value)
    }

    fn separator(&mut self) -> Result<(), DateTextError> {
        match self.chars.next() {
            Some(c) if !c.is_ascii_digit() && !c.is_whitespace() => Ok(()),
            _ => Err(DateTextError::Malformed),
        }
    }

    fn finish(&mut self) -> Result<(), DateTextError> {
        match self.chars.next() {
            None => Ok(()),
            Some(_) => Err(DateTextError::Malformed),
        }
    }
}
