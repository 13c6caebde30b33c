//! Admin handlers: access-code issuance.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tutoria_booking::codes;
use tutoria_booking::providers::{AccessCodeStore, BookingStore, EmailProvider};

/// Request to mint an access code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeRequest {
    /// Caller-supplied admin secret.
    pub admin_key: Option<String>,
}

/// Response after minting an access code.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateCodeResponse {
    /// Always `true` on the success path.
    pub success: bool,

    /// The minted code, to be relayed out-of-band.
    pub code: String,
}

/// Mint a new single-use access code.
///
/// # Endpoint
///
/// ```text
/// POST /api/admin/generate-code
/// Content-Type: application/json
///
/// {"adminKey": "..."}
/// ```
///
/// # Responses
///
/// - `200` `{"success": true, "code": "A1B2C3D4"}`
/// - `401` `{"error": "Unauthorized"}` — bad key
/// - `500` `{"error": "Server configuration error"}` — no key configured
pub async fn generate_code<C, B, E>(
    State(state): State<AppState<C, B, E>>,
    Json(request): Json<GenerateCodeRequest>,
) -> Result<Json<GenerateCodeResponse>, AppError>
where
    C: AccessCodeStore + Clone + 'static,
    B: BookingStore + Clone + 'static,
    E: EmailProvider + Clone + 'static,
{
    let presented = request.admin_key.unwrap_or_default();
    let access_code = codes::issue_code(&state.env, &presented).await?;

    Ok(Json(GenerateCodeResponse {
        success: true,
        code: access_code.code,
    }))
}
