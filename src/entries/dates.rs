use chrono::{Datelike, NaiveDate};

const DAY_MONTH_YEAR: &str = "%d/%m/%Y";

/// Parses a `day/month/year` textual date, returning `None` for anything
/// malformed or out of range. Surrounding whitespace is tolerated; two-digit
/// years are rejected rather than guessed.
pub fn parse_day_month_year(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DAY_MONTH_YEAR).ok()
}

/// Linear month index (`year * 12 + month - 1`) used for whole-month
/// arithmetic that ignores the day of month.
pub fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month() as i32 - 1
}
