//! Mock provider implementations for testing.
//!
//! Simple, in-memory implementations of all provider traits for use in
//! unit and integration tests. The store mocks preserve the atomic
//! consume/claim semantics of the PostgreSQL stores.

pub mod bookings;
pub mod codes;
pub mod email;

pub use bookings::MockBookingStore;
pub use codes::MockAccessCodeStore;
pub use email::{MockEmailProvider, SentEmail, SentEmailKind};
