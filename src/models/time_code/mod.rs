// Time code module
// Quarter-hour resolution time-of-day values and their display forms

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::sync::OnceLock;

pub const QUARTERS_PER_HOUR: i64 = 4;
pub const MINUTES_PER_QUARTER: u32 = 15;
pub const HOURS_PER_DAY: i64 = 24;

/// Last valid quarter index in a day (23:45).
pub const MAX_QUARTER: i64 = HOURS_PER_DAY * QUARTERS_PER_HOUR - 1;

pub const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A point in a day at quarter-hour resolution.
///
/// Values are only built through [`CalendarTimeCode::from_quarters_clamped`]
/// (or [`CalendarTimeCode::new`], which routes through it), so `hours` is
/// always in `0..=23` and `quarters` in `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarTimeCode {
    hours: u8,
    quarters: u8,
}

impl CalendarTimeCode {
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        quarters: 0,
    };

    /// Build a code from an hour and quarter, clamping the combined value
    /// into the day.
    pub fn new(hours: i64, quarters: i64) -> Self {
        let total = hours.saturating_mul(QUARTERS_PER_HOUR).saturating_add(quarters);
        Self::from_quarters_clamped(total)
    }

    /// Convert a count of quarter hours since midnight into a code.
    ///
    /// Input outside `[0, 95]` is clamped rather than rejected.
    pub fn from_quarters_clamped(total_quarters: i64) -> Self {
        let safe = total_quarters.clamp(0, MAX_QUARTER);
        Self {
            hours: (safe / QUARTERS_PER_HOUR) as u8,
            quarters: (safe % QUARTERS_PER_HOUR) as u8,
        }
    }

    pub fn hours(self) -> u8 {
        self.hours
    }

    pub fn quarters(self) -> u8 {
        self.quarters
    }

    pub fn minutes(self) -> u32 {
        self.quarters as u32 * MINUTES_PER_QUARTER
    }

    pub fn to_quarters(self) -> i64 {
        self.hours as i64 * QUARTERS_PER_HOUR + self.quarters as i64
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hours as u32, self.minutes(), 0).unwrap_or(NaiveTime::MIN)
    }

    /// Render as a 12-hour clock label, e.g. `"9 AM"` or `"1:30 PM"`.
    pub fn natural_label(self, include_minutes: bool) -> String {
        let mod12 = self.hours % 12;
        let hour = if mod12 == 0 { 12 } else { mod12 };
        let suffix = if self.hours >= 12 { "PM" } else { "AM" };
        if include_minutes {
            format!("{}:{:02} {}", hour, self.minutes(), suffix)
        } else {
            format!("{} {}", hour, suffix)
        }
    }
}

impl fmt::Display for CalendarTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.natural_label(true))
    }
}

/// Hour labels for the time grid gutter, one per hour without minutes.
pub fn hours() -> &'static [String; 24] {
    static HOURS: OnceLock<[String; 24]> = OnceLock::new();
    HOURS.get_or_init(|| {
        std::array::from_fn(|hour| CalendarTimeCode::new(hour as i64, 0).natural_label(false))
    })
}

/// Combine a calendar date with a time code. Seconds are always zero.
pub fn moment_from_date_and_code(date: NaiveDate, code: CalendarTimeCode) -> NaiveDateTime {
    date.and_time(code.to_naive_time())
}

/// Build a date from a year, an English month name and a day of month.
pub fn date_from_natural_form(year: i32, month: &str, day: u32) -> Option<NaiveDate> {
    let index = MONTHS.iter().position(|m| m.eq_ignore_ascii_case(month))?;
    NaiveDate::from_ymd_opt(year, index as u32 + 1, day)
}
