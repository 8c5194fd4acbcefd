// src/handlers/submit.rs

use axum::{extract::State, http::StatusCode, Json};

use crate::models::submission::{ErrorResponse, SubmissionPayload, SubmitResponse};
use crate::services::submission::{self, SubmissionError};
use crate::AppState;

pub async fn health() -> &'static str {
    "Customer onboarding backend is running"
}

/// POST /submit-form
///
/// Validates the intake payload and persists it across the profile tables
/// in one transaction. A duplicate PAN answers 409 so the client can send
/// the user back to the PAN field; everything else that goes wrong during
/// the write answers 400 with the failure message.
pub async fn submit_form(
    State(state): State<AppState>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<Json<SubmitResponse>, (StatusCode, Json<ErrorResponse>)> {
    tracing::debug!(
        emp_id = %payload.emp_id,
        company = %payload.company_name,
        "received onboarding submission"
    );

    match submission::submit(&state.db, &payload).await {
        Ok(_customer_id) => Ok(Json(SubmitResponse {
            message: "Form submitted successfully".to_string(),
        })),
        Err(SubmissionError::DuplicatePan) => {
            tracing::warn!(pan = %payload.pan, "rejected duplicate PAN");
            Err((
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: "PAN number already exists".to_string(),
                }),
            ))
        }
        Err(err) => {
            tracing::error!("submission failed: {err}");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to submit form: {err}"),
                }),
            ))
        }
    }
}
