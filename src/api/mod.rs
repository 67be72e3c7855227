//! HTTP API module for the Sandwich-Leave Deduction Engine.
//!
//! This module provides the REST endpoints used by the leave application
//! screens (preview), the approval workflow (final) and bulk re-evaluation
//! (batch).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BatchDeductionRequest, DeductionRequest, HolidayBody, LeaveRequestBody, SiblingBody,
};
pub use response::{
    ApiError, ApiErrorResponse, BatchDeductionResponse, CalculationMode, DeductionResponse,
};
pub use state::AppState;
