//! Calendar math shared by the statistics engine and the period matcher.
//!
//! Week-of-month here is a 1-based bucketing of calendar days into the week
//! rows of a Sunday-first month grid, aligned to the weekday the month
//! starts on. It is not an ISO week number.

use chrono::{Datelike, NaiveDate};

/// Get the weekday the month starts on (0 = Sunday, 1 = Monday, etc.).
pub fn first_day_of_month(month: u32, year: i32) -> u32 {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        // chrono's weekday(): Monday = 1, ..., Sunday = 7
        // Our format: Sunday = 0, Monday = 1, ..., Saturday = 6
        Some(date) => date.weekday().num_days_from_sunday(),
        None => 0,
    }
}

/// Get the 1-based week row a date lands on in its month's grid.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let offset = first_day_of_month(date.month(), date.year());
    (date.day() + offset).div_ceil(7)
}

/// Roll a month/year pair back by one calendar month.
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// Format a date's month for the monthly series, e.g. "Mar 2024".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
