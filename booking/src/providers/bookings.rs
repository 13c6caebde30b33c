//! Booking store trait.

use crate::error::Result;
use crate::model::{Booking, BookingId, CodeId, ReminderWindow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Data for a booking about to be created.
///
/// Requester attributes are carried as submitted; presence and shape are
/// validated by the creation service before this struct is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    /// Requester name.
    pub name: String,

    /// Requester email address.
    pub email: String,

    /// Requester school year.
    pub school_year: String,

    /// Requested hours per week.
    pub hours_per_week: String,

    /// Absolute session start time.
    pub date: DateTime<Utc>,

    /// The validated access code this booking consumes.
    pub code_id: CodeId,
}

/// Persistent store for bookings.
pub trait BookingStore: Send + Sync {
    /// Persist a new booking with all reminder flags unset.
    ///
    /// # Errors
    ///
    /// Returns error if the store rejects the insert.
    fn create(&self, new: NewBooking) -> impl Future<Output = Result<Booking>> + Send;

    /// Fetch all bookings whose session starts at or after `now`.
    ///
    /// # Errors
    ///
    /// Returns error on store failure.
    fn find_upcoming(&self, now: DateTime<Utc>)
    -> impl Future<Output = Result<Vec<Booking>>> + Send;

    /// Atomically claim a reminder window: flip its sent-flag false→true in
    /// a single conditional update.
    ///
    /// Returns `true` if this caller set the flag, `false` if it was
    /// already set (for instance by an overlapping job run). A claimed
    /// window is final; there is no way to unset a flag.
    ///
    /// # Errors
    ///
    /// Returns error on store failure only.
    fn mark_reminder_sent(
        &self,
        id: BookingId,
        window: ReminderWindow,
    ) -> impl Future<Output = Result<bool>> + Send;
}
