//! Booking creation handler.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tutoria_booking::bookings;
use tutoria_booking::providers::{AccessCodeStore, BookingStore, EmailProvider, NewBooking};
use tutoria_booking::{BookingId, CodeId};

/// Request to create a booking.
///
/// Every field is required; presence is checked here so a partial body
/// yields a 400 naming the missing fields rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Requester name.
    pub name: Option<String>,

    /// Requester email address.
    pub email: Option<String>,

    /// Requester school year.
    pub school_year: Option<String>,

    /// Requested hours per week.
    pub hours_per_week: Option<String>,

    /// Session start time, ISO 8601.
    pub date: Option<String>,

    /// Identifier returned by code validation.
    pub code_id: Option<String>,
}

/// Response after creating a booking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    /// Always `true` on the success path.
    pub success: bool,

    /// Identifier of the created booking.
    pub booking_id: BookingId,
}

/// Create a booking, consuming its access code.
///
/// # Endpoint
///
/// ```text
/// POST /api/bookings/create
/// Content-Type: application/json
///
/// {
///   "name": "Ana",
///   "email": "ana@example.com",
///   "schoolYear": "11",
///   "hoursPerWeek": "2",
///   "date": "2026-03-14T15:00:00.000Z",
///   "codeId": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// # Responses
///
/// - `200` `{"success": true, "bookingId": "..."}`
/// - `400` `{"error": "..."}` — missing fields, invalid or used code
/// - `500` `{"error": "..."}` — unexpected failure
pub async fn create_booking<C, B, E>(
    State(state): State<AppState<C, B, E>>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError>
where
    C: AccessCodeStore + Clone + 'static,
    B: BookingStore + Clone + 'static,
    E: EmailProvider + Clone + 'static,
{
    let new = into_new_booking(request)?;
    let booking = bookings::create_booking(&state.env, new).await?;

    Ok(Json(CreateBookingResponse {
        success: true,
        booking_id: booking.id,
    }))
}

/// Presence-check the request and parse the typed fields.
fn into_new_booking(request: CreateBookingRequest) -> Result<NewBooking, AppError> {
    let mut missing = Vec::new();

    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());

    if !present(&request.name) {
        missing.push("name");
    }
    if !present(&request.email) {
        missing.push("email");
    }
    if !present(&request.school_year) {
        missing.push("schoolYear");
    }
    if !present(&request.hours_per_week) {
        missing.push("hoursPerWeek");
    }
    if !present(&request.date) {
        missing.push("date");
    }
    if !present(&request.code_id) {
        missing.push("codeId");
    }

    if !missing.is_empty() {
        return Err(AppError::bad_request(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let date = parse_date(request.date.unwrap_or_default())?;
    let code_id = parse_code_id(request.code_id.unwrap_or_default())?;

    Ok(NewBooking {
        name: request.name.unwrap_or_default(),
        email: request.email.unwrap_or_default(),
        school_year: request.school_year.unwrap_or_default(),
        hours_per_week: request.hours_per_week.unwrap_or_default(),
        date,
        code_id,
    })
}

fn parse_date(raw: String) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::bad_request("date must be an ISO 8601 timestamp"))
}

fn parse_code_id(raw: String) -> Result<CodeId, AppError> {
    raw.trim()
        .parse::<uuid::Uuid>()
        .map(CodeId)
        .map_err(|_| AppError::bad_request("codeId is not a valid identifier"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_request() -> CreateBookingRequest {
        CreateBookingRequest {
            name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            school_year: Some("11".to_string()),
            hours_per_week: Some("2".to_string()),
            date: Some("2026-03-14T15:00:00.000Z".to_string()),
            code_id: Some(uuid::Uuid::new_v4().to_string()),
        }
    }

    #[test]
    fn test_full_request_parses() {
        let new = into_new_booking(full_request()).unwrap();
        assert_eq!(new.name, "Ana");
        assert_eq!(new.date.to_rfc3339(), "2026-03-14T15:00:00+00:00");
    }

    #[test]
    fn test_missing_fields_are_named() {
        let mut request = full_request();
        request.email = None;
        request.date = Some("  ".to_string());

        let err = into_new_booking(request).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("email"));
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut request = full_request();
        request.date = Some("tomorrow at noon".to_string());
        assert!(into_new_booking(request).is_err());
    }

    #[test]
    fn test_malformed_code_id_is_rejected() {
        let mut request = full_request();
        request.code_id = Some("not-a-uuid".to_string());
        assert!(into_new_booking(request).is_err());
    }
}
