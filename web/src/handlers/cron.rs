//! Reminder job trigger.

use crate::error::AppError;
use crate::extractors::BearerToken;
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use tutoria_booking::providers::{AccessCodeStore, BookingStore, EmailProvider};
use tutoria_booking::reminders;

/// Response after a reminder job run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRemindersResponse {
    /// Always `true` on the success path.
    pub success: bool,

    /// Number of future bookings scanned.
    pub bookings_checked: usize,

    /// Number of reminders fired.
    pub emails_sent: usize,
}

/// Run the reminder dispatch job.
///
/// Invoked by an external scheduler; the request must carry the cron
/// shared secret as a bearer token. The scheduler's cadence must be at
/// least as fine as the reminder window width or reminders are silently
/// skipped — see `ReminderConfig`.
///
/// # Endpoint
///
/// ```text
/// GET /api/cron/send-reminders
/// Authorization: Bearer <CRON_SECRET>
/// ```
///
/// # Responses
///
/// - `200` `{"success": true, "bookingsChecked": 3, "emailsSent": 1}`
/// - `401` `{"error": "Unauthorized"}` — missing or wrong secret
/// - `500` `{"error": "..."}` — scan failure
pub async fn send_reminders<C, B, E>(
    State(state): State<AppState<C, B, E>>,
    BearerToken(token): BearerToken,
) -> Result<Json<SendRemindersResponse>, AppError>
where
    C: AccessCodeStore + Clone + 'static,
    B: BookingStore + Clone + 'static,
    E: EmailProvider + Clone + 'static,
{
    let Some(expected) = state.env.secrets.cron_secret.as_deref() else {
        tracing::error!("reminder job triggered but CRON_SECRET is not configured");
        return Err(AppError::internal("Server configuration error"));
    };

    if !constant_time_eq::constant_time_eq(token.as_bytes(), expected.as_bytes()) {
        tracing::warn!("reminder job rejected: bad cron secret");
        return Err(AppError::unauthorized("Unauthorized"));
    }

    let run = reminders::run_reminders(&state.env, Utc::now()).await?;

    Ok(Json(SendRemindersResponse {
        success: true,
        bookings_checked: run.bookings_checked,
        emails_sent: run.emails_sent,
    }))
}
