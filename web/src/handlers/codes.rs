//! Code validation handler.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::{Deserialize, Serialize};
use tutoria_booking::codes;
use tutoria_booking::providers::{AccessCodeStore, BookingStore, EmailProvider};
use tutoria_booking::{BookingError, CodeId};

/// Request to validate a submitted code.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateCodeRequest {
    /// The code string, as typed by the requester.
    pub code: Option<String>,
}

/// Validation outcome.
///
/// Success carries the opaque identifier for the subsequent booking
/// request; failure carries a user-facing message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCodeResponse {
    /// Whether the code may be used.
    pub valid: bool,

    /// Identifier to reference in the booking request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_id: Option<CodeId>,

    /// Why the code was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Validate a submitted access code.
///
/// Validation has no side effect; the code is only consumed by a later
/// booking creation.
///
/// # Endpoint
///
/// ```text
/// POST /api/validate-code
/// Content-Type: application/json
///
/// {"code": "a1b2c3d4"}
/// ```
///
/// # Responses
///
/// - `200` `{"valid": true, "codeId": "..."}`
/// - `400` `{"valid": false, "message": "..."}` — unknown or used code
pub async fn validate_code<C, B, E>(
    State(state): State<AppState<C, B, E>>,
    Json(request): Json<ValidateCodeRequest>,
) -> Response
where
    C: AccessCodeStore + Clone + 'static,
    B: BookingStore + Clone + 'static,
    E: EmailProvider + Clone + 'static,
{
    let Some(submitted) = request.code.filter(|c| !c.trim().is_empty()) else {
        return rejection("An access code is required");
    };

    match codes::validate_code(&state.env, &submitted).await {
        Ok(code_id) => (
            StatusCode::OK,
            Json(ValidateCodeResponse {
                valid: true,
                code_id: Some(code_id),
                message: None,
            }),
        )
            .into_response(),
        Err(err @ (BookingError::CodeInvalid | BookingError::CodeAlreadyUsed)) => {
            rejection(&err.to_string())
        }
        Err(err) => AppError::from(err).into_response(),
    }
}

/// The 400-with-message shape this endpoint uses instead of `{"error"}`.
fn rejection(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidateCodeResponse {
            valid: false,
            code_id: None,
            message: Some(message.to_string()),
        }),
    )
        .into_response()
}
