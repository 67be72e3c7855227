//! HTTP request handlers for the Sandwich-Leave Deduction Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_batch, compute_deduction};
use crate::config::ConfigLoader;
use crate::error::EngineError;
use crate::models::{LeaveRequest, SiblingRequest};

use super::request::{BatchDeductionRequest, DeductionRequest, calendar_from};
use super::response::{
    ApiError, ApiErrorResponse, BatchDeductionResponse, CalculationMode, DeductionResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/deductions", post(finalize_handler))
        .route("/deductions/preview", post(preview_handler))
        .route("/deductions/batch", post(batch_handler))
        .with_state(state)
}

/// Handler for POST /deductions/preview.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeductionRequest>, JsonRejection>,
) -> Response {
    deduction_handler(&state, payload, CalculationMode::Preview)
}

/// Handler for POST /deductions.
async fn finalize_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeductionRequest>, JsonRejection>,
) -> Response {
    deduction_handler(&state, payload, CalculationMode::Final)
}

fn deduction_handler(
    state: &AppState,
    payload: Result<Json<DeductionRequest>, JsonRejection>,
    mode: CalculationMode,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, mode = ?mode, "Processing deduction request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let leave_id = request.request.id.clone();
    match perform_deduction(request, state.config(), mode) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                leave_id = %leave_id,
                reason_code = %response.result.reason_code,
                deducted_days = %response.result.deducted_days,
                duration_us = response.duration_us,
                "Deduction completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /deductions/batch.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchDeductionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch deduction request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let start_time = Instant::now();
    let requests: Vec<LeaveRequest> = request.requests.into_iter().map(Into::into).collect();
    let supplied = calendar_from(request.holidays);
    let holidays = supplied
        .as_ref()
        .unwrap_or_else(|| config.holiday_calendar());

    match compute_batch(&requests, holidays, config.policy()) {
        Ok(results) => {
            let duration_us = elapsed_us(start_time);
            info!(
                correlation_id = %correlation_id,
                requests_count = results.len(),
                duration_us,
                "Batch deduction completed successfully"
            );
            json_response(
                StatusCode::OK,
                BatchDeductionResponse {
                    calculation_id: Uuid::new_v4(),
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    results,
                    duration_us,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Computes a deduction for one request body.
///
/// Preview and final calculations both go through here, so the same body
/// always produces the same [`crate::models::DeductionResult`].
fn perform_deduction(
    request: DeductionRequest,
    config: &ConfigLoader,
    mode: CalculationMode,
) -> Result<DeductionResponse, EngineError> {
    let start_time = Instant::now();

    let leave: LeaveRequest = request.request.into();
    let siblings: Vec<SiblingRequest> = request.siblings.into_iter().map(Into::into).collect();
    let supplied = calendar_from(request.holidays);
    let holidays = supplied
        .as_ref()
        .unwrap_or_else(|| config.holiday_calendar());

    let result = compute_deduction(&leave, holidays, &siblings, config.policy())?;

    Ok(DeductionResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        mode,
        result,
        duration_us: elapsed_us(start_time),
    })
}

fn elapsed_us(start_time: Instant) -> u64 {
    u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        validation = err.is_validation(),
        "Deduction failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
