//! Service environment.
//!
//! This module defines the environment type for dependency injection into
//! the service operations.

use crate::config::{ReminderConfig, Secrets};
use crate::providers::{AccessCodeStore, BookingStore, EmailProvider};

/// Service environment.
///
/// Contains all external dependencies and configuration needed by the
/// service operations.
///
/// # Type Parameters
///
/// - `C`: Access-code store
/// - `B`: Booking store
/// - `E`: Email provider
#[derive(Clone)]
pub struct Environment<C, B, E>
where
    C: AccessCodeStore + Clone,
    B: BookingStore + Clone,
    E: EmailProvider + Clone,
{
    /// Access-code store (`PostgreSQL`).
    pub codes: C,

    /// Booking store (`PostgreSQL`).
    pub bookings: B,

    /// Email provider.
    pub email: E,

    /// Admin and cron shared secrets.
    pub secrets: Secrets,

    /// Operator notification address; `None` disables operator emails.
    pub operator_email: Option<String>,

    /// Reminder dispatch configuration.
    pub reminder: ReminderConfig,
}

impl<C, B, E> Environment<C, B, E>
where
    C: AccessCodeStore + Clone,
    B: BookingStore + Clone,
    E: EmailProvider + Clone,
{
    /// Create a new service environment.
    #[must_use]
    pub const fn new(
        codes: C,
        bookings: B,
        email: E,
        secrets: Secrets,
        operator_email: Option<String>,
        reminder: ReminderConfig,
    ) -> Self {
        Self {
            codes,
            bookings,
            email,
            secrets,
            operator_email,
            reminder,
        }
    }
}
