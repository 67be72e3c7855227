//! Core data models for the Sandwich-Leave Deduction Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod deduction_result;
mod holiday;
mod leave_request;

pub use deduction_result::{AuditStep, AuditTrace, AuditWarning, DeductionResult, ReasonCode};
pub use holiday::{Holiday, HolidayCalendar};
pub use leave_request::{LeaveRequest, SiblingRequest};
