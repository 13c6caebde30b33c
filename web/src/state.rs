//! Application state for Axum handlers.

use std::sync::Arc;
use tutoria_booking::providers::{AccessCodeStore, BookingStore, EmailProvider};
use tutoria_booking::Environment;

/// Application state shared across all HTTP handlers.
///
/// Holds the service [`Environment`] behind an `Arc` so cloning per
/// request is cheap. The environment — and with it the process-wide
/// connection pool — is built exactly once at startup.
#[derive(Clone)]
pub struct AppState<C, B, E>
where
    C: AccessCodeStore + Clone,
    B: BookingStore + Clone,
    E: EmailProvider + Clone,
{
    /// Shared service environment.
    pub env: Arc<Environment<C, B, E>>,
}

impl<C, B, E> AppState<C, B, E>
where
    C: AccessCodeStore + Clone,
    B: BookingStore + Clone,
    E: EmailProvider + Clone,
{
    /// Create application state from a service environment.
    #[must_use]
    pub fn new(env: Environment<C, B, E>) -> Self {
        Self { env: Arc::new(env) }
    }
}
