//! Day-range expansion.
//!
//! Turns a start/end date pair into the inclusive, ordered sequence of
//! calendar days it covers.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;

use super::day_classifier::{DayClassification, classify};

/// An inclusive, validated range of calendar days.
///
/// The range can be iterated any number of times and always yields the same
/// dates in ascending order.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::expand_range;
/// use chrono::NaiveDate;
///
/// let range = expand_range(
///     NaiveDate::from_ymd_opt(2025, 9, 26).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 9, 29).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(range.num_days(), 4);
/// let days: Vec<NaiveDate> = range.iter().collect();
/// assert_eq!(days.first(), Some(&NaiveDate::from_ymd_opt(2025, 9, 26).unwrap()));
/// assert_eq!(days.last(), Some(&NaiveDate::from_ymd_opt(2025, 9, 29).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DayRange {
    /// Creates a range, failing when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Weekday of the first day.
    pub fn start_weekday(&self) -> Weekday {
        self.start.weekday()
    }

    /// Number of calendar days, inclusive of both ends.
    pub fn num_days(&self) -> u32 {
        let days = (self.end - self.start).num_days() + 1;
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Returns true if the range covers exactly one day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Checks whether a date falls within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates the days of the range in ascending order.
    pub fn iter(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for &DayRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

/// Iterator over the days of a [`DayRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|date| *date <= self.end)?;
        self.next = current.succ_opt();
        Some(current)
    }
}

/// Expands a start/end pair into a [`DayRange`].
///
/// Fails with [`EngineError::InvalidRange`] when `start > end`.
pub fn expand_range(start: NaiveDate, end: NaiveDate) -> EngineResult<DayRange> {
    DayRange::new(start, end)
}

/// Classifies every day of the range against the holiday calendar.
pub fn classify_range(range: &DayRange, holidays: &HolidayCalendar) -> Vec<DayClassification> {
    range.iter().map(|date| classify(date, holidays)).collect()
}
