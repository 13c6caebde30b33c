//! Email provider trait.

use crate::error::Result;
use crate::model::{Booking, ReminderWindow};
use std::future::Future;

/// Email provider.
///
/// This trait abstracts over email delivery services (a transactional-email
/// HTTP API, SMTP, etc.). Every send is best-effort from the caller's point
/// of view: service operations log failures and never let them fail the
/// surrounding state change.
pub trait EmailProvider: Send + Sync {
    /// Send the booking confirmation to the requester.
    ///
    /// # Errors
    ///
    /// Returns error if the provider rejects the request or the network
    /// call fails.
    fn send_booking_confirmation(
        &self,
        booking: &Booking,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Notify the operator that a new booking was created.
    ///
    /// # Errors
    ///
    /// Returns error if the provider rejects the request or the network
    /// call fails.
    fn send_operator_notification(
        &self,
        to: &str,
        booking: &Booking,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Send an upcoming-session reminder to the requester.
    ///
    /// # Errors
    ///
    /// Returns error if the provider rejects the request or the network
    /// call fails.
    fn send_reminder(
        &self,
        booking: &Booking,
        window: ReminderWindow,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Send an upcoming-session reminder to the operator.
    ///
    /// # Errors
    ///
    /// Returns error if the provider rejects the request or the network
    /// call fails.
    fn send_operator_reminder(
        &self,
        to: &str,
        booking: &Booking,
        window: ReminderWindow,
    ) -> impl Future<Output = Result<()>> + Send;
}
