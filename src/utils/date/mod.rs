// Date utility functions
// Week arithmetic and short date formatting for the week header

use chrono::{Datelike, Duration, NaiveDate};

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// The seven consecutive dates of the week containing `date`.
pub fn week_dates(date: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let start = get_week_start(date, first_day_of_week);
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// Format a date in short form based on the date format setting.
///
/// # Arguments
/// * `date` - The date to format
/// * `date_format` - The format preference (e.g., "DD/MM/YYYY", "MM/DD/YYYY", "YYYY/MM/DD")
pub fn format_short_date(date: NaiveDate, date_format: &str) -> String {
    if date_format.starts_with("DD/MM") || date_format.starts_with("dd/mm") {
        date.format("%d/%m").to_string()
    } else if date_format.starts_with("YYYY") || date_format.starts_with("yyyy") {
        date.format("%Y/%m/%d").to_string()
    } else {
        date.format("%m/%d").to_string()
    }
}
