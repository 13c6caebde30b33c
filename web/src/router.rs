//! Router composition.

use crate::handlers::{admin, bookings, codes, cron, health};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tutoria_booking::providers::{AccessCodeStore, BookingStore, EmailProvider};

/// Compose all endpoints into a single router.
///
/// # Routes
///
/// - `GET /health` — liveness probe
/// - `POST /api/admin/generate-code` — mint an access code
/// - `POST /api/validate-code` — check a submitted code
/// - `POST /api/bookings/create` — create a booking
/// - `GET /api/cron/send-reminders` — reminder job trigger
///
/// # Example
///
/// ```rust,ignore
/// let state = AppState::new(environment);
/// let app = api_router(state).layer(TraceLayer::new_for_http());
/// ```
pub fn api_router<C, B, E>(state: AppState<C, B, E>) -> Router
where
    C: AccessCodeStore + Clone + 'static,
    B: BookingStore + Clone + 'static,
    E: EmailProvider + Clone + 'static,
{
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/admin/generate-code",
            post(admin::generate_code::<C, B, E>),
        )
        .route("/api/validate-code", post(codes::validate_code::<C, B, E>))
        .route(
            "/api/bookings/create",
            post(bookings::create_booking::<C, B, E>),
        )
        .route(
            "/api/cron/send-reminders",
            get(cron::send_reminders::<C, B, E>),
        )
        .with_state(state)
}
