//! Deduction calculation.
//!
//! This module composes the classifier, range expander, working-day counter,
//! pattern matcher and sudden-leave detector into a single decision: how many
//! days a leave request costs if it is granted.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{SandwichPenalties, SandwichPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DeductionResult, HolidayCalendar, LeaveRequest,
    ReasonCode, SiblingRequest,
};

use super::day_classifier::{DayClassification, classify};
use super::day_range::{DayRange, expand_range};
use super::sandwich_pattern::{SiblingProvider, match_sandwich_pattern};
use super::working_days::count_working_days;

/// Computes the deduction for a single leave request.
///
/// The steps are, in order:
/// 1. Expand the date range, rejecting inverted ranges and ranges longer
///    than `policy.max_range_days`.
/// 2. Reject the half-day flag on anything but a single day.
/// 3. Count the base working days.
/// 4. Exempt a single day that is itself a mandatory holiday, when the
///    policy allows it.
/// 5. Otherwise match the sandwich patterns in priority order and take the
///    flat penalty of the first match, or the base count when none matches.
/// 6. Scale by the half-day fraction for half-day requests.
///
/// Duplicate holidays inside the range and siblings without an employee id are
/// reported as audit warnings; they never fail the computation.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::{NoSiblings, compute_deduction};
/// use leave_engine::config::SandwichPolicy;
/// use leave_engine::models::{HolidayCalendar, LeaveRequest, ReasonCode};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
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
/// let result = compute_deduction(
///     &request,
///     &HolidayCalendar::default(),
///     &NoSiblings,
///     &SandwichPolicy::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.deducted_days, Decimal::new(4, 0));
/// assert_eq!(result.base_working_days, 2);
/// assert_eq!(result.reason_code, ReasonCode::FriToMon);
/// assert!(result.is_sandwich_leave);
/// ```
pub fn compute_deduction<S: SiblingProvider + ?Sized>(
    request: &LeaveRequest,
    holidays: &HolidayCalendar,
    siblings: &S,
    policy: &SandwichPolicy,
) -> EngineResult<DeductionResult> {
    let range = expand_range(request.start_date, request.end_date)?;

    if range.num_days() > policy.max_range_days {
        return Err(EngineError::RangeTooLong {
            start: request.start_date,
            end: request.end_date,
            days: range.num_days(),
            max: policy.max_range_days,
        });
    }

    if request.is_half_day && !range.is_single_day() {
        return Err(EngineError::InvalidHalfDay {
            start: request.start_date,
            end: request.end_date,
        });
    }

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings = duplicate_holiday_warnings(&range, holidays);
    let mut step_number: u32 = 1;

    let count = count_working_days(&range, holidays, step_number);
    let base_working_days = count.working_days;
    steps.push(count.audit_step);
    step_number += 1;

    let reason_code = match exempt_holiday(&range, holidays, policy) {
        Some(day) => {
            let holiday_name = day.holiday_name.as_deref().unwrap_or("holiday");
            warnings.push(AuditWarning {
                code: "LEAVE_ON_MANDATORY_HOLIDAY".to_string(),
                message: format!(
                    "Leave requested on {} which is a mandatory holiday ({})",
                    day.date, holiday_name
                ),
                severity: "low".to_string(),
            });
            steps.push(AuditStep {
                step_number,
                rule_id: "holiday_exemption".to_string(),
                rule_name: "Single-Day Holiday Exemption".to_string(),
                policy_ref: "exempt_single_day_holidays".to_string(),
                input: serde_json::json!({
                    "date": day.date.to_string(),
                    "holiday": holiday_name
                }),
                output: serde_json::json!({ "exempt": true }),
                reasoning: format!(
                    "{} is a mandatory holiday; sandwich rules skipped",
                    day.date
                ),
            });
            step_number += 1;
            ReasonCode::None
        }
        None => {
            let matched = match_sandwich_pattern(
                request,
                &range,
                siblings,
                policy.sibling_window_days,
                step_number,
            );
            step_number += u32::try_from(matched.audit_steps.len()).unwrap_or(0);
            steps.extend(matched.audit_steps);
            warnings.extend(matched.warnings);

            match matched.pattern {
                Some(pattern) if request.is_half_day && !pattern.supports_half_day() => {
                    return Err(EngineError::UnsupportedHalfDayPattern {
                        pattern: pattern.reason_code().to_string(),
                    });
                }
                Some(pattern) => pattern.reason_code(),
                None => ReasonCode::None,
            }
        }
    };

    let full_day_deduction = policy
        .penalties
        .for_reason(reason_code)
        .unwrap_or_else(|| Decimal::from(base_working_days));

    let deducted_days = if request.is_half_day {
        full_day_deduction * policy.half_day_fraction
    } else {
        full_day_deduction
    }
    .normalize();

    let is_sandwich_leave = reason_code != ReasonCode::None;

    let reasoning = match (is_sandwich_leave, request.is_half_day) {
        (true, false) => format!("{} flat penalty of {} days", reason_code, deducted_days),
        (true, true) => format!(
            "{} penalty of {} days x half-day fraction {} = {} days",
            reason_code, full_day_deduction, policy.half_day_fraction, deducted_days
        ),
        (false, false) => format!("No sandwich rule applied; {} working days", deducted_days),
        (false, true) => format!(
            "No sandwich rule applied; {} working days x half-day fraction {} = {} days",
            base_working_days, policy.half_day_fraction, deducted_days
        ),
    };

    steps.push(AuditStep {
        step_number,
        rule_id: "deduction_total".to_string(),
        rule_name: "Deduction Total".to_string(),
        policy_ref: SandwichPenalties::policy_key(reason_code).to_string(),
        input: serde_json::json!({
            "reason_code": reason_code,
            "base_working_days": base_working_days,
            "is_half_day": request.is_half_day
        }),
        output: serde_json::json!({
            "deducted_days": deducted_days.to_string(),
            "is_sandwich_leave": is_sandwich_leave
        }),
        reasoning,
    });

    debug!(
        leave_id = %request.id,
        employee_id = %request.employee_id,
        reason_code = %reason_code,
        deducted_days = %deducted_days,
        base_working_days,
        "Deduction computed"
    );

    Ok(DeductionResult {
        deducted_days,
        base_working_days,
        total_calendar_days: count.total_days,
        is_sandwich_leave,
        reason_code,
        audit_trace: AuditTrace { steps, warnings },
    })
}

/// Computes deductions for several requests at once.
///
/// Each request sees every other request in the batch as a sibling, so a
/// Friday and a Monday filed separately by the same employee are charged as a
/// split pair. Results are returned in input order; the first error aborts the
/// batch.
///
/// Sibling views are built once and grouped by employee, so each request only
/// scans its own employee's other applications.
pub fn compute_batch(
    requests: &[LeaveRequest],
    holidays: &HolidayCalendar,
    policy: &SandwichPolicy,
) -> EngineResult<Vec<DeductionResult>> {
    let peers: Vec<SiblingRequest> = requests.iter().map(SiblingRequest::from).collect();

    let mut by_employee: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, request) in requests.iter().enumerate() {
        by_employee
            .entry(request.employee_id.as_str())
            .or_default()
            .push(index);
    }

    requests
        .iter()
        .enumerate()
        .map(|(index, request)| {
            let group = by_employee
                .get(request.employee_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            let siblings = BatchPeers {
                peers: &peers,
                group,
                own: index,
            };
            compute_deduction(request, holidays, &siblings, policy)
        })
        .collect()
}

/// Siblings of one batch entry: the same employee's other requests.
struct BatchPeers<'a> {
    peers: &'a [SiblingRequest],
    group: &'a [usize],
    own: usize,
}

impl SiblingProvider for BatchPeers<'_> {
    fn siblings_between(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<SiblingRequest> {
        self.group
            .iter()
            .filter(|&&index| index != self.own)
            .filter_map(|&index| self.peers.get(index))
            .filter(|peer| peer.overlaps(from, to))
            .filter(|peer| peer.employee_id.as_deref().is_none_or(|id| id == employee_id))
            .cloned()
            .collect()
    }
}

/// Returns the classified day when the request is a single mandatory holiday
/// and the policy exempts such days.
fn exempt_holiday(
    range: &DayRange,
    holidays: &HolidayCalendar,
    policy: &SandwichPolicy,
) -> Option<DayClassification> {
    if !policy.exempt_single_day_holidays || !range.is_single_day() {
        return None;
    }
    Some(classify(range.start(), holidays)).filter(|day| day.is_mandatory_holiday)
}

fn duplicate_holiday_warnings(range: &DayRange, holidays: &HolidayCalendar) -> Vec<AuditWarning> {
    holidays
        .duplicates()
        .iter()
        .filter(|duplicate| range.contains(duplicate.date))
        .map(|duplicate| AuditWarning {
            code: "DUPLICATE_HOLIDAY".to_string(),
            message: format!(
                "Duplicate holiday '{}' on {} ignored; first entry kept",
                duplicate.name, duplicate.date
            ),
            severity: "low".to_string(),
        })
        .collect()
}
