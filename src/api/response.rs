//! Response types for the Sandwich-Leave Deduction Engine API.
//!
//! This module defines the success envelopes, the error response structures
//! and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::DeductionResult;

/// Whether a deduction was previewed or computed for persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Shown to the employee before submitting.
    Preview,
    /// Computed at approval time for the caller to persist.
    Final,
}

/// Envelope returned by the single-request endpoints.
///
/// The envelope carries the per-call identifiers and timings; the wrapped
/// [`DeductionResult`] is identical for identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Engine version that produced the result.
    pub engine_version: String,
    /// Preview or final.
    pub mode: CalculationMode,
    /// The deduction decision.
    pub result: DeductionResult,
    /// Calculation time in microseconds.
    pub duration_us: u64,
}

/// Envelope returned by `/deductions/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDeductionResponse {
    /// Unique identifier for this batch.
    pub calculation_id: Uuid,
    /// When the batch was evaluated.
    pub timestamp: DateTime<Utc>,
    /// Engine version that produced the results.
    pub engine_version: String,
    /// One result per request, in input order.
    pub results: Vec<DeductionResult>,
    /// Total calculation time in microseconds.
    pub duration_us: u64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    "start_date must be on or before end_date",
                ),
            },
            EngineError::InvalidHalfDay { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_HALF_DAY",
                    message,
                    "is_half_day is only allowed when start_date equals end_date",
                ),
            },
            EngineError::RangeTooLong { max, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RANGE_TOO_LONG",
                    message,
                    format!("A single request may span at most {} days", max),
                ),
            },
            EngineError::UnsupportedHalfDayPattern { pattern } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNSUPPORTED_HALF_DAY_PATTERN",
                    message,
                    format!("Apply for a full day to use the {} rule", pattern),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("INVALID_POLICY", "Invalid leave policy", message),
            },
        }
    }
}
