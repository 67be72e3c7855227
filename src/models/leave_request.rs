//! Leave request models.
//!
//! This module defines the [`LeaveRequest`] being evaluated and the
//! [`SiblingRequest`] projection of an employee's other applications.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A leave application whose deduction is being computed.
///
/// The request is immutable for the duration of a computation.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveRequest;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let request = LeaveRequest {
///     id: "leave_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 9, 26).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 9, 29).unwrap(),
///     is_half_day: false,
///     submitted_at: NaiveDateTime::parse_from_str("2025-09-20 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     approved: true,
/// };
///
/// assert_eq!(request.calendar_days(), 4);
/// assert!(!request.is_single_day());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Identifier of the application.
    pub id: String,
    /// The employee who filed the application.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Whether only half of the single requested day is taken.
    #[serde(default)]
    pub is_half_day: bool,
    /// When the application was created.
    pub submitted_at: NaiveDateTime,
    /// Whether the application has been, or will be, approved.
    pub approved: bool,
}

impl LeaveRequest {
    /// Returns true if the request starts and ends on the same date.
    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }

    /// Number of calendar days covered, inclusive of both ends.
    ///
    /// Returns 0 for an inverted range.
    pub fn calendar_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days).unwrap_or(0)
    }
}

/// Minimal projection of another application filed by the same employee.
///
/// Only used to detect the split Friday + Monday pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingRequest {
    /// First day of the sibling application (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the sibling application (inclusive).
    pub end_date: NaiveDate,
    /// The employee who filed it, if known.
    #[serde(default)]
    pub employee_id: Option<String>,
}

impl SiblingRequest {
    /// Checks whether the sibling covers the given date.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::SiblingRequest;
    /// use chrono::NaiveDate;
    ///
    /// let sibling = SiblingRequest {
    ///     start_date: NaiveDate::from_ymd_opt(2025, 9, 29).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
    ///     employee_id: Some("emp_001".to_string()),
    /// };
    ///
    /// assert!(sibling.covers(NaiveDate::from_ymd_opt(2025, 9, 29).unwrap()));
    /// assert!(!sibling.covers(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()));
    /// ```
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks whether the sibling overlaps the inclusive window `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date >= from
    }
}

impl From<&LeaveRequest> for SiblingRequest {
    fn from(request: &LeaveRequest) -> Self {
        SiblingRequest {
            start_date: request.start_date,
            end_date: request.end_date,
            employee_id: Some(request.employee_id.clone()),
        }
    }
}
