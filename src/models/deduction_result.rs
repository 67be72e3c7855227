//! Deduction result models for the Sandwich-Leave Deduction Engine.
//!
//! This module contains the [`DeductionResult`] type and its associated
//! structures that capture the outcome of a deduction, including the reason
//! code and a complete audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies which row of the sandwich policy produced a deduction.
///
/// # Example
///
/// ```
/// use leave_engine::models::ReasonCode;
///
/// assert_eq!(ReasonCode::FriToMon.to_string(), "FRI_TO_MON");
/// assert_eq!(serde_json::to_string(&ReasonCode::None).unwrap(), "\"NONE\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// Friday, Saturday and Sunday taken together.
    FriSatSun,
    /// Saturday, Sunday and Monday taken together.
    SatSunMon,
    /// Friday through Monday taken as one block.
    FriToMon,
    /// Friday and Monday filed as separate single-day requests.
    SplitFriMon,
    /// Single Friday or Monday filed in advance and approved.
    SingleAdvance,
    /// Single Friday or Monday filed on the day or left unapproved.
    SingleSudden,
    /// No sandwich rule applied.
    None,
}

impl ReasonCode {
    /// The wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::FriSatSun => "FRI_SAT_SUN",
            ReasonCode::SatSunMon => "SAT_SUN_MON",
            ReasonCode::FriToMon => "FRI_TO_MON",
            ReasonCode::SplitFriMon => "SPLIT_FRI_MON",
            ReasonCode::SingleAdvance => "SINGLE_ADVANCE",
            ReasonCode::SingleSudden => "SINGLE_SUDDEN",
            ReasonCode::None => "NONE",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The policy key the rule reads (e.g., "penalties.fri_to_mon").
    pub policy_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag data-quality anomalies that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a deduction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The outcome of evaluating one leave request.
///
/// The result holds no timestamps or generated ids, so computing it twice
/// from the same inputs gives equal values.
///
/// # Example
///
/// ```
/// use leave_engine::models::{AuditTrace, DeductionResult, ReasonCode};
/// use rust_decimal::Decimal;
///
/// let result = DeductionResult {
///     deducted_days: Decimal::new(2, 0),
///     base_working_days: 2,
///     total_calendar_days: 3,
///     is_sandwich_leave: false,
///     reason_code: ReasonCode::None,
///     audit_trace: AuditTrace::default(),
/// };
/// assert!(!result.is_sandwich_leave);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// Days to deduct from the employee's balance.
    pub deducted_days: Decimal,
    /// Working days in the range, ignoring sandwich rules.
    pub base_working_days: u32,
    /// Calendar days in the range.
    pub total_calendar_days: u32,
    /// Whether a sandwich pattern set the deduction.
    pub is_sandwich_leave: bool,
    /// Which policy row fired.
    pub reason_code: ReasonCode,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
