// Selection module
// What the user picked on the week grid and what they intend to use it for

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

use crate::models::time_code::{moment_from_date_and_code, CalendarTimeCode};

/// Shape of a selection, which decides the purposes on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Date,
    Moment,
    Span,
}

impl SelectionKind {
    /// Whether `purpose` can be chosen for a selection of this kind.
    ///
    /// A span has no single start or due point, and a moment has no
    /// duration to work in.
    pub fn allows(self, purpose: TimePurpose) -> bool {
        match (self, purpose) {
            (SelectionKind::Span, TimePurpose::Start | TimePurpose::Due) => false,
            (SelectionKind::Moment, TimePurpose::Work) => false,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePurpose {
    Start,
    Due,
    Event,
    Work,
}

impl TimePurpose {
    /// Menu order: top, right, bottom, left.
    pub const ALL: [TimePurpose; 4] = [
        TimePurpose::Start,
        TimePurpose::Due,
        TimePurpose::Event,
        TimePurpose::Work,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimePurpose::Start => "Start",
            TimePurpose::Due => "Due",
            TimePurpose::Event => "Event",
            TimePurpose::Work => "Work",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TimePurpose::Start => "▶",
            TimePurpose::Due => "🎯",
            TimePurpose::Event => "⭐",
            TimePurpose::Work => "💼",
        }
    }
}

impl fmt::Display for TimePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A finished gesture on the week grid, resolved to a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Date {
        day: usize,
        date: NaiveDate,
    },
    Moment {
        day: usize,
        date: NaiveDate,
        code: CalendarTimeCode,
    },
    Span {
        day: usize,
        date: NaiveDate,
        start: CalendarTimeCode,
        end: CalendarTimeCode,
    },
}

impl Selection {
    /// Build the selection a drag produces: a span when the codes differ,
    /// otherwise a moment.
    pub fn from_drag(
        day: usize,
        date: NaiveDate,
        start: CalendarTimeCode,
        end: CalendarTimeCode,
    ) -> Self {
        if start != end {
            Selection::Span {
                day,
                date,
                start,
                end,
            }
        } else {
            Selection::Moment {
                day,
                date,
                code: start,
            }
        }
    }

    pub fn kind(&self) -> SelectionKind {
        match self {
            Selection::Date { .. } => SelectionKind::Date,
            Selection::Moment { .. } => SelectionKind::Moment,
            Selection::Span { .. } => SelectionKind::Span,
        }
    }

    pub fn day(&self) -> usize {
        match *self {
            Selection::Date { day, .. }
            | Selection::Moment { day, .. }
            | Selection::Span { day, .. } => day,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match *self {
            Selection::Date { date, .. }
            | Selection::Moment { date, .. }
            | Selection::Span { date, .. } => date,
        }
    }

    /// Start and end labels for a span, in drag order.
    pub fn range_labels(&self) -> Option<(String, String)> {
        match *self {
            Selection::Span { start, end, .. } => {
                Some((start.natural_label(true), end.natural_label(true)))
            }
            _ => None,
        }
    }

    /// Earliest and latest instants covered, with the span normalised so
    /// the first value is never after the second.
    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match *self {
            Selection::Date { .. } => None,
            Selection::Moment { date, code, .. } => {
                let at = moment_from_date_and_code(date, code);
                Some((at, at))
            }
            Selection::Span {
                date, start, end, ..
            } => {
                let (first, last) = if start <= end { (start, end) } else { (end, start) };
                Some((
                    moment_from_date_and_code(date, first),
                    moment_from_date_and_code(date, last),
                ))
            }
        }
    }

    /// Human readable summary, e.g. `SPAN (9:00 AM to 11:30 AM) from Mon 10/19`.
    pub fn describe(&self) -> String {
        let when = self.date().format("%a %m/%d");
        match *self {
            Selection::Date { .. } => format!("DATE {}", when),
            Selection::Moment { code, .. } => {
                format!("MOMENT ({}) from {}", code.natural_label(true), when)
            }
            Selection::Span { start, end, .. } => format!(
                "SPAN ({} to {}) from {}",
                start.natural_label(true),
                end.natural_label(true),
                when
            ),
        }
    }
}
