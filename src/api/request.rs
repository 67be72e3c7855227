//! Request types for the Sandwich-Leave Deduction Engine API.
//!
//! This module defines the JSON request structures for the `/deductions`
//! endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, HolidayCalendar, LeaveRequest, SiblingRequest};

/// Request body for `/deductions` and `/deductions/preview`.
///
/// Preview and final calculation share this body so that identical inputs
/// always reach the calculator identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionRequest {
    /// The leave application being evaluated.
    pub request: LeaveRequestBody,
    /// Holidays to evaluate against; the configured calendar is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<HolidayBody>>,
    /// The employee's other applications around the requested dates.
    #[serde(default)]
    pub siblings: Vec<SiblingBody>,
}

/// Request body for `/deductions/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDeductionRequest {
    /// Applications to evaluate; each sees the others as siblings.
    pub requests: Vec<LeaveRequestBody>,
    /// Holidays to evaluate against; the configured calendar is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<HolidayBody>>,
}

/// Leave application in a deduction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestBody {
    /// Identifier of the application.
    pub id: String,
    /// The employee who filed it.
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
    /// Whether the application is, or will be, approved.
    pub approved: bool,
}

/// Holiday in a deduction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayBody {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// Optional holidays are charged like ordinary days.
    #[serde(default)]
    pub is_optional: bool,
}

/// Sibling application in a deduction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiblingBody {
    /// First day of the sibling application.
    pub start_date: NaiveDate,
    /// Last day of the sibling application.
    pub end_date: NaiveDate,
    /// The employee who filed it.
    #[serde(default)]
    pub employee_id: Option<String>,
}

impl From<LeaveRequestBody> for LeaveRequest {
    fn from(req: LeaveRequestBody) -> Self {
        LeaveRequest {
            id: req.id,
            employee_id: req.employee_id,
            start_date: req.start_date,
            end_date: req.end_date,
            is_half_day: req.is_half_day,
            submitted_at: req.submitted_at,
            approved: req.approved,
        }
    }
}

impl From<HolidayBody> for Holiday {
    fn from(req: HolidayBody) -> Self {
        Holiday {
            date: req.date,
            name: req.name,
            is_optional: req.is_optional,
        }
    }
}

impl From<SiblingBody> for SiblingRequest {
    fn from(req: SiblingBody) -> Self {
        SiblingRequest {
            start_date: req.start_date,
            end_date: req.end_date,
            employee_id: req.employee_id,
        }
    }
}

/// Builds a calendar from request holidays, if any were supplied.
pub(crate) fn calendar_from(holidays: Option<Vec<HolidayBody>>) -> Option<HolidayCalendar> {
    holidays.map(|list| list.into_iter().map(Holiday::from).collect())
}
