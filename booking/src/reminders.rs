//! Reminder dispatch job.
//!
//! Invoked on a fixed cadence by an external scheduler (not owned by this
//! system). Each run scans future bookings and fires any reminder window
//! the session currently sits in, at most once per window per booking.

use crate::environment::Environment;
use crate::error::Result;
use crate::model::{Booking, ReminderWindow};
use crate::providers::{AccessCodeStore, BookingStore, EmailProvider};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one reminder job run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReminderRun {
    /// Number of future bookings scanned.
    pub bookings_checked: usize,

    /// Number of reminders fired (one per claimed window, covering both
    /// the requester and operator emails for that window).
    pub emails_sent: usize,
}

/// Scan future bookings and dispatch due reminders.
///
/// For each booking the three windows are checked independently. A due,
/// unsent window is first claimed through the store's conditional flag
/// update — so overlapping job runs cannot both fire it — and then the
/// requester and operator emails are attempted. Email failures are logged
/// and swallowed: a claimed window is final and is never retried, matching
/// the no-catch-up contract.
///
/// One booking's store failure does not abort the run; the error is logged
/// and iteration continues.
///
/// # Errors
///
/// Returns `Database` only if the initial scan fails.
pub async fn run_reminders<C, B, E>(
    env: &Environment<C, B, E>,
    now: DateTime<Utc>,
) -> Result<ReminderRun>
where
    C: AccessCodeStore + Clone,
    B: BookingStore + Clone,
    E: EmailProvider + Clone,
{
    let bookings = env.bookings.find_upcoming(now).await?;
    tracing::info!(count = bookings.len(), "reminder scan: future bookings");

    let mut emails_sent = 0;
    for booking in &bookings {
        emails_sent += dispatch_due_windows(env, booking, now).await;
    }

    tracing::info!(emails_sent, "reminder scan complete");
    Ok(ReminderRun {
        bookings_checked: bookings.len(),
        emails_sent,
    })
}

/// Fire every due window for one booking; returns the number fired.
async fn dispatch_due_windows<C, B, E>(
    env: &Environment<C, B, E>,
    booking: &Booking,
    now: DateTime<Utc>,
) -> usize
where
    C: AccessCodeStore + Clone,
    B: BookingStore + Clone,
    E: EmailProvider + Clone,
{
    let until = booking.date - now;
    let mut fired = 0;

    for window in ReminderWindow::ALL {
        if !window.contains(until) || window.already_sent(booking) {
            continue;
        }

        // Claim the window before sending. The conditional update admits
        // exactly one claimant across overlapping runs.
        match env.bookings.mark_reminder_sent(booking.id, window).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(
                    booking_id = %booking.id.0,
                    window = window.label(),
                    "window already claimed by a concurrent run"
                );
                continue;
            }
            Err(e) => {
                tracing::error!(
                    booking_id = %booking.id.0,
                    window = window.label(),
                    error = %e,
                    "failed to claim reminder window"
                );
                continue;
            }
        }

        if let Err(e) = env.email.send_reminder(booking, window).await {
            tracing::warn!(
                booking_id = %booking.id.0,
                window = window.label(),
                error = %e,
                "reminder email failed"
            );
        }
        if let Some(operator) = env.operator_email.as_deref() {
            if let Err(e) = env.email.send_operator_reminder(operator, booking, window).await {
                tracing::warn!(
                    booking_id = %booking.id.0,
                    window = window.label(),
                    error = %e,
                    "operator reminder failed"
                );
            }
        }

        tracing::info!(
            booking_id = %booking.id.0,
            window = window.label(),
            "reminder dispatched"
        );
        fired += 1;
    }

    fired
}
