//! Calendar month being viewed, and due-day clamping
//!
//! Expenses and paydays are stored as nominal days (1-31). Before any
//! comparison they are clamped to the real length of the month on screen,
//! so a bill due on the 31st lands on the 30th in April and on the 28th or
//! 29th in February.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

/// Number of days in a month (1-based month)
///
/// Returns 0 for an invalid month or a year outside chrono's range.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return 0,
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// Clamp a nominal day-of-month into the actual bounds of a month
///
/// Result is `max(1, min(nominal_day, days_in_month))`. Never fails.
pub fn clamp_day(nominal_day: i64, year: i32, month: u32) -> u32 {
    let last = days_in_month(year, month).max(1) as i64;
    nominal_day.clamp(1, last) as u32
}

/// A calendar month, with a 1-based month number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewMonth {
    year: i32,
    month: u32,
}

impl ViewMonth {
    /// Create a month; `month` is 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Create a month from a zero-based month index (0 = January)
    pub fn from_month_index(year: i32, month_index: u32) -> Option<Self> {
        Self::new(year, month_index.checked_add(1)?)
    }

    /// The current local month
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// The month that contains a date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-based month index, 0-11
    pub fn month_index(&self) -> u32 {
        self.month - 1
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Clamp a nominal day into this month
    pub fn clamp(&self, nominal_day: i64) -> u32 {
        clamp_day(nominal_day, self.year, self.month)
    }

    /// First day of the month
    pub fn first_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Weekday of the first day of the month
    pub fn first_weekday(&self) -> Weekday {
        self.first_date().weekday()
    }

    /// Next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Human-friendly name, e.g. "February 2025"
    pub fn friendly(&self) -> String {
        self.first_date().format("%B %Y").to_string()
    }
}

impl fmt::Display for ViewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error returned when a month string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(pub String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month '{}' (expected YYYY-MM)", self.0)
    }
}

impl std::error::Error for MonthParseError {}

impl FromStr for ViewMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthParseError(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}
