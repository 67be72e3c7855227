//! Sudden-leave detection.
//!
//! Classifies a request as filed in advance or suddenly, by comparing the
//! calendar date it was submitted on with its first day of leave.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// How much notice a leave request was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveNotice {
    /// Submitted on a date before the leave starts.
    Advance,
    /// Submitted on or after the first day of leave.
    Sudden,
}

impl std::fmt::Display for LeaveNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveNotice::Advance => write!(f, "advance"),
            LeaveNotice::Sudden => write!(f, "sudden"),
        }
    }
}

/// Returns true when the request was submitted on or after its start date.
///
/// Only the calendar date of `submitted_at` matters; a request filed at
/// 23:59 the day before is still advance notice.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::is_sudden;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let start = NaiveDate::from_ymd_opt(2025, 9, 26).unwrap();
/// let same_day = NaiveDateTime::parse_from_str("2025-09-26 07:45:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let week_before = NaiveDateTime::parse_from_str("2025-09-20 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert!(is_sudden(same_day, start));
/// assert!(!is_sudden(week_before, start));
/// ```
pub fn is_sudden(submitted_at: NaiveDateTime, start_date: NaiveDate) -> bool {
    submitted_at.date() >= start_date
}

/// The result of classifying the notice given for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeDetection {
    /// Advance or sudden.
    pub notice: LeaveNotice,
    /// Whole days between submission date and start date (negative when backdated).
    pub notice_days: i64,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Classifies the notice given for a request and documents the decision.
pub fn detect_sudden_leave(
    submitted_at: NaiveDateTime,
    start_date: NaiveDate,
    step_number: u32,
) -> NoticeDetection {
    let notice = if is_sudden(submitted_at, start_date) {
        LeaveNotice::Sudden
    } else {
        LeaveNotice::Advance
    };
    let notice_days = (start_date - submitted_at.date()).num_days();

    let reasoning = match notice {
        LeaveNotice::Advance => format!(
            "Submitted on {}, {} days before leave starting {}",
            submitted_at.date(),
            notice_days,
            start_date
        ),
        LeaveNotice::Sudden => format!(
            "Submitted on {}, on or after leave starting {}",
            submitted_at.date(),
            start_date
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "sudden_leave_detection".to_string(),
        rule_name: "Sudden Leave Detection".to_string(),
        policy_ref: "notice".to_string(),
        input: serde_json::json!({
            "submitted_at": submitted_at.to_string(),
            "start_date": start_date.to_string()
        }),
        output: serde_json::json!({
            "notice": notice.to_string(),
            "notice_days": notice_days
        }),
        reasoning,
    };

    NoticeDetection {
        notice,
        notice_days,
        audit_step,
    }
}
