//! # Tutoria Booking
//!
//! Domain logic for a private tutor's booking service: single-use access
//! codes, bookings that consume them, and time-windowed session reminders.
//!
//! ## Architecture
//!
//! External dependencies (storage, email) are abstracted behind provider
//! traits so the service operations stay testable at memory speed:
//!
//! ```text
//! HTTP handler → service operation → Environment → provider traits
//!                                                   ├─ AccessCodeStore
//!                                                   ├─ BookingStore
//!                                                   └─ EmailProvider
//! ```
//!
//! ## Access-code lifecycle
//!
//! A code is minted unused, survives any number of validations, and is
//! consumed by exactly one booking. Consumption is a store-level
//! compare-and-swap: of two concurrent submissions referencing the same
//! code, the store rejects the loser.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tutoria_booking::{codes, bookings, Environment};
//!
//! let code = codes::issue_code(&env, &presented_admin_key).await?;
//! let code_id = codes::validate_code(&env, &submitted).await?;
//! let booking = bookings::create_booking(&env, new_booking).await?;
//! ```

// Public modules
pub mod bookings;
pub mod codes;
pub mod config;
pub mod environment;
pub mod error;
pub mod model;
pub mod providers;
pub mod reminders;
pub mod stores;
pub mod utils;

#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export main types for convenience
pub use config::{ReminderConfig, Secrets};
pub use environment::Environment;
pub use error::{BookingError, Result};
pub use model::{AccessCode, Booking, BookingId, CodeId, ReminderWindow};
