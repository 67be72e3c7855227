//! Working-day counting.
//!
//! This module counts the days in a range that are neither weekend days nor
//! mandatory holidays. That count is the deduction before any sandwich rule
//! is applied.
//!
//! Weekdays are counted arithmetically from whole weeks plus the leftover
//! days, and holidays are read from the calendar entries inside the range, so
//! the cost does not grow with the length of the range.

use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, HolidayCalendar};

use super::day_classifier::is_weekend;
use super::day_range::DayRange;

const DAYS_PER_WEEK: u32 = 7;
const WEEKDAYS_PER_WEEK: u32 = 5;

/// The result of counting working days, with the audit step documenting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDayCount {
    /// Days that are neither weekend nor mandatory holiday.
    pub working_days: u32,
    /// Saturdays and Sundays in the range.
    pub weekend_days: u32,
    /// Weekdays excluded because of a mandatory holiday.
    pub holiday_days: u32,
    /// Calendar days in the range.
    pub total_days: u32,
    /// The audit step recording this count.
    pub audit_step: AuditStep,
}

/// Counts working days in a range against the holiday calendar.
///
/// A mandatory holiday falling on a weekend is counted once, as a weekend day.
/// Optional holidays are charged like ordinary days.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{count_working_days, expand_range};
/// use leave_engine::models::{Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// // Tuesday to Thursday with the Wednesday a mandatory holiday
/// let calendar = HolidayCalendar::new(vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     name: "Foundation Day".to_string(),
///     is_optional: false,
/// }]);
/// let range = expand_range(
///     NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 10, 2).unwrap(),
/// )
/// .unwrap();
///
/// let count = count_working_days(&range, &calendar, 1);
/// assert_eq!(count.working_days, 2);
/// assert_eq!(count.holiday_days, 1);
/// ```
pub fn count_working_days(
    range: &DayRange,
    holidays: &HolidayCalendar,
    step_number: u32,
) -> WorkingDayCount {
    let total_days = range.num_days();
    let leftover = total_days % DAYS_PER_WEEK;
    let leftover_weekdays = range
        .iter()
        .take(leftover as usize)
        .filter(|date| !is_weekend(*date))
        .count() as u32;
    let weekdays = (total_days / DAYS_PER_WEEK) * WEEKDAYS_PER_WEEK + leftover_weekdays;
    let weekend_days = total_days - weekdays;

    let excluded_holidays: Vec<String> = holidays
        .between(range.start(), range.end())
        .filter(|h| h.is_mandatory() && !is_weekend(h.date))
        .map(|h| h.date.to_string())
        .collect();
    let holiday_days = u32::try_from(excluded_holidays.len()).unwrap_or(u32::MAX);
    let working_days = weekdays.saturating_sub(holiday_days);

    let reasoning = format!(
        "{} calendar days minus {} weekend days and {} mandatory holidays leaves {} working days",
        total_days, weekend_days, holiday_days, working_days
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "working_day_count".to_string(),
        rule_name: "Working Day Count".to_string(),
        policy_ref: "working_days".to_string(),
        input: serde_json::json!({
            "start_date": range.start().to_string(),
            "end_date": range.end().to_string(),
            "total_days": total_days
        }),
        output: serde_json::json!({
            "working_days": working_days,
            "weekend_days": weekend_days,
            "holiday_days": holiday_days,
            "excluded_holidays": excluded_holidays
        }),
        reasoning,
    };

    WorkingDayCount {
        working_days,
        weekend_days,
        holiday_days,
        total_days,
        audit_step,
    }
}
