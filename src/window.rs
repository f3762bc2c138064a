use std::fmt;

use chrono::Days;
use chrono::NaiveDate;
use getset::CopyGetters;

/// Length of one API query.
pub const WINDOW_DAYS: u64 = 2;

/// `DD/MM/YYYY`, the short date form the events endpoint expects.
pub const QUERY_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

/// Half-open date range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
}

impl Window {
    /// `None` only when the end would fall past the last representable date.
    pub fn starting(start: NaiveDate) -> Option<Self> {
        let end = start.checked_add_days(Days::new(WINDOW_DAYS))?;
        Some(Self { start, end })
    }

    pub fn query_start(&self) -> String {
        format_date(self.start)
    }

    pub fn query_end(&self) -> String {
        format_date(self.end)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.query_start(), self.query_end())
    }
}

/// Consecutive windows from a start date onwards.
///
/// The walk itself never decides to stop; the caller ends it on the first
/// window that comes back empty.
pub struct DateRangeWalker {
    next: Option<Window>,
}

impl DateRangeWalker {
    pub fn new(start: NaiveDate) -> Self {
        Self {
            next: Window::starting(start),
        }
    }

    /// The window the next call to `next` will yield.
    pub fn upcoming(&self) -> Option<Window> {
        self.next
    }
}

impl Iterator for DateRangeWalker {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        let current = self.next?;
        self.next = Window::starting(current.end);
        Some(current)
    }
}
