//! Mock email provider for testing.

use crate::error::{BookingError, Result};
use crate::model::{Booking, ReminderWindow};
use crate::providers::EmailProvider;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// What kind of email a mock send recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentEmailKind {
    /// Booking confirmation to the requester.
    Confirmation,

    /// New-booking notification to the operator.
    OperatorNotification,

    /// Session reminder to the requester.
    Reminder(ReminderWindow),

    /// Session reminder to the operator.
    OperatorReminder(ReminderWindow),
}

/// One recorded email send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    /// Recipient address.
    pub to: String,

    /// Which template was sent.
    pub kind: SentEmailKind,
}

/// Mock email provider.
///
/// Records sends instead of delivering them; can be told to fail every
/// send to exercise best-effort paths.
#[derive(Debug, Clone)]
pub struct MockEmailProvider {
    /// Whether sends succeed or fail.
    should_succeed: bool,

    /// Recorded sends (also recorded when failing).
    sent: Arc<Mutex<Vec<SentEmail>>>,
}

impl MockEmailProvider {
    /// Create a new mock email provider that succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_succeed: true,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock provider whose every send fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            should_succeed: false,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of all successful sends.
    ///
    /// # Errors
    ///
    /// Returns error if the lock is poisoned.
    pub fn sent(&self) -> Result<Vec<SentEmail>> {
        Ok(self
            .sent
            .lock()
            .map_err(|_| BookingError::Email("mutex poisoned".to_string()))?
            .clone())
    }

    /// Number of successful sends.
    ///
    /// # Errors
    ///
    /// Returns error if the lock is poisoned.
    pub fn sent_count(&self) -> Result<usize> {
        Ok(self.sent()?.len())
    }

    fn record(&self, to: &str, kind: SentEmailKind) -> Result<()> {
        if !self.should_succeed {
            return Err(BookingError::Email("mock send failure".to_string()));
        }

        self.sent
            .lock()
            .map_err(|_| BookingError::Email("mutex poisoned".to_string()))?
            .push(SentEmail {
                to: to.to_string(),
                kind,
            });
        Ok(())
    }
}

impl Default for MockEmailProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailProvider for MockEmailProvider {
    fn send_booking_confirmation(
        &self,
        booking: &Booking,
    ) -> impl Future<Output = Result<()>> + Send {
        let result = self.record(&booking.email, SentEmailKind::Confirmation);
        async move { result }
    }

    fn send_operator_notification(
        &self,
        to: &str,
        _booking: &Booking,
    ) -> impl Future<Output = Result<()>> + Send {
        let result = self.record(to, SentEmailKind::OperatorNotification);
        async move { result }
    }

    fn send_reminder(
        &self,
        booking: &Booking,
        window: ReminderWindow,
    ) -> impl Future<Output = Result<()>> + Send {
        let result = self.record(&booking.email, SentEmailKind::Reminder(window));
        async move { result }
    }

    fn send_operator_reminder(
        &self,
        to: &str,
        _booking: &Booking,
        window: ReminderWindow,
    ) -> impl Future<Output = Result<()>> + Send {
        let result = self.record(to, SentEmailKind::OperatorReminder(window));
        async move { result }
    }
}
