//! Calendar day classification.
//!
//! This module determines, for any date, its weekday, whether it falls on a
//! weekend and whether a mandatory holiday exempts it from deduction.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidayCalendar;

/// The calendar facts about a single date that drive leave deduction.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::classify;
/// use leave_engine::models::{Holiday, HolidayCalendar};
/// use chrono::{NaiveDate, Weekday};
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// let calendar = HolidayCalendar::new(vec![Holiday {
///     date,
///     name: "Foundation Day".to_string(),
///     is_optional: false,
/// }]);
///
/// let day = classify(date, &calendar);
/// assert_eq!(day.weekday, Weekday::Wed);
/// assert!(!day.is_weekend);
/// assert!(day.is_mandatory_holiday);
/// assert!(!day.is_working_day());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The classified date.
    pub date: NaiveDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// A non-optional holiday falls on this date.
    pub is_mandatory_holiday: bool,
    /// Name of the holiday on this date, optional or not.
    pub holiday_name: Option<String>,
}

impl DayClassification {
    /// A working day is neither a weekend day nor a mandatory holiday.
    pub fn is_working_day(&self) -> bool {
        !self.is_weekend && !self.is_mandatory_holiday
    }
}

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies a date against the holiday calendar.
///
/// Optional holidays are reported by name but do not set
/// `is_mandatory_holiday`, so they are charged like ordinary days.
pub fn classify(date: NaiveDate, holidays: &HolidayCalendar) -> DayClassification {
    let holiday = holidays.get(date);

    DayClassification {
        date,
        weekday: date.weekday(),
        is_weekend: is_weekend(date),
        is_mandatory_holiday: holiday.is_some_and(|h| h.is_mandatory()),
        holiday_name: holiday.map(|h| h.name.clone()),
    }
}
