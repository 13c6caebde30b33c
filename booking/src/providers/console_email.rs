//! Console email provider for development and unconfigured deployments.

use crate::error::Result;
use crate::model::{Booking, ReminderWindow};
use crate::providers::EmailProvider;
use tracing::info;

/// Console email provider.
///
/// Logs emails instead of sending them. Selected automatically when no
/// email provider is configured, so booking and reminder flows keep
/// working without delivery.
#[derive(Clone, Debug, Default)]
pub struct ConsoleEmailProvider;

impl ConsoleEmailProvider {
    /// Create a new console email provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EmailProvider for ConsoleEmailProvider {
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<()> {
        info!(
            to = %booking.email,
            name = %booking.name,
            date = %booking.date,
            "📧 Booking confirmation (email sending not configured)"
        );
        Ok(())
    }

    async fn send_operator_notification(&self, to: &str, booking: &Booking) -> Result<()> {
        info!(
            to = %to,
            student = %booking.name,
            date = %booking.date,
            "📧 Operator booking notification (email sending not configured)"
        );
        Ok(())
    }

    async fn send_reminder(&self, booking: &Booking, window: ReminderWindow) -> Result<()> {
        info!(
            to = %booking.email,
            window = window.label(),
            date = %booking.date,
            "📧 Session reminder (email sending not configured)"
        );
        Ok(())
    }

    async fn send_operator_reminder(
        &self,
        to: &str,
        booking: &Booking,
        window: ReminderWindow,
    ) -> Result<()> {
        info!(
            to = %to,
            student = %booking.name,
            window = window.label(),
            "📧 Operator session reminder (email sending not configured)"
        );
        Ok(())
    }
}
