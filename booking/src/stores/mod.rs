//! Storage implementations.
//!
//! - **Access-code store** (`PostgreSQL`) — persistent single-use codes
//!   with atomic consumption
//! - **Booking store** (`PostgreSQL`) — persistent bookings with atomic
//!   reminder-flag claims

pub mod postgres;

// Re-exports
pub use postgres::{PostgresAccessCodeStore, PostgresBookingStore};
