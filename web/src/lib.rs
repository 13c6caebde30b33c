//! Axum HTTP layer for the Tutoria booking service.
//!
//! Thin handlers over the domain crate's service operations:
//!
//! 1. **HTTP request** arrives at an Axum handler
//! 2. **Extract data** from the request (JSON body, bearer header)
//! 3. **Call** the service operation through the shared [`AppState`]
//! 4. **Map result** to the endpoint's wire shape and status code
//!
//! # Routes
//!
//! - `POST /api/admin/generate-code` — mint an access code (admin secret)
//! - `POST /api/validate-code` — check a submitted code
//! - `POST /api/bookings/create` — create a booking, consuming its code
//! - `GET /api/cron/send-reminders` — reminder job trigger (bearer secret)
//! - `GET /health` — liveness probe

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::BearerToken;
pub use router::api_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
