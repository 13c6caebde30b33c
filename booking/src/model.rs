//! Core domain types.
//!
//! All types are `Clone` and serde-friendly so they can flow through
//! provider traits, handlers, and tests without ceremony.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// ID Types
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for an access code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeId(pub uuid::Uuid);

impl CodeId {
    /// Generate a new random `CodeId`.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub uuid::Uuid);

impl BookingId {
    /// Generate a new random `BookingId`.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Records
// ═══════════════════════════════════════════════════════════════════════

/// A single-use authorization token, relayed to the requester out-of-band.
///
/// Created unused by the issuance service; flipped to used exactly once by
/// booking creation; never deleted in normal operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCode {
    /// Opaque identifier.
    pub id: CodeId,

    /// Human-relayed code string, 8 uppercase hex characters, unique.
    pub code: String,

    /// Whether a booking has consumed this code.
    pub is_used: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Consumption timestamp, set exactly once.
    pub used_at: Option<DateTime<Utc>>,
}

/// A scheduled tutoring session tied to one consumed access code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Opaque identifier.
    pub id: BookingId,

    /// Requester name.
    pub name: String,

    /// Requester email address.
    pub email: String,

    /// Requester school year, as submitted.
    pub school_year: String,

    /// Requested hours per week, as submitted.
    pub hours_per_week: String,

    /// Absolute session start time.
    pub date: DateTime<Utc>,

    /// The access code this booking consumed.
    pub code_id: CodeId,

    /// Whether the 24-hour reminder has been dispatched.
    pub email_24h_sent: bool,

    /// Whether the 1-hour reminder has been dispatched.
    pub email_1h_sent: bool,

    /// Whether the 15-minute reminder has been dispatched.
    pub email_15m_sent: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

// ═══════════════════════════════════════════════════════════════════════
// Reminder Windows
// ═══════════════════════════════════════════════════════════════════════

/// A bounded interval before a session's start during which exactly one
/// reminder email should fire.
///
/// The three windows are independent and mutually non-exclusive; each is
/// guarded by its own sent-flag on the [`Booking`]. Every window is 15
/// minutes wide, which couples reminder delivery to the cadence of the
/// external scheduler — see [`crate::config::ReminderConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReminderWindow {
    /// Fires between 23h45m and 24h before the session.
    TwentyFourHours,

    /// Fires between 45m and 1h before the session.
    OneHour,

    /// Fires between 0 and 15m before the session.
    FifteenMinutes,
}

impl ReminderWindow {
    /// All windows, in firing order (furthest from the session first).
    pub const ALL: [Self; 3] = [Self::TwentyFourHours, Self::OneHour, Self::FifteenMinutes];

    /// Width shared by all three windows.
    pub const WIDTH_MINUTES: i64 = 15;

    /// Whether `until` (time remaining before the session) falls inside
    /// this window.
    ///
    /// Bounds are half-open on the far side: a session exactly 24 hours
    /// away is inside the 24-hour window, one 24h0m1s away is not.
    #[must_use]
    pub fn contains(self, until: Duration) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let minutes = until.num_milliseconds() as f64 / 60_000.0;
        let hours = minutes / 60.0;

        match self {
            Self::TwentyFourHours => hours > 23.75 && hours <= 24.0,
            Self::OneHour => hours > 0.75 && hours <= 1.0,
            Self::FifteenMinutes => minutes > 0.0 && minutes <= 15.0,
        }
    }

    /// Whether this window's reminder has already been dispatched for
    /// `booking`.
    #[must_use]
    pub const fn already_sent(self, booking: &Booking) -> bool {
        match self {
            Self::TwentyFourHours => booking.email_24h_sent,
            Self::OneHour => booking.email_1h_sent,
            Self::FifteenMinutes => booking.email_15m_sent,
        }
    }

    /// Human-readable label for email copy ("24 hours", "1 hour", ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TwentyFourHours => "24 hours",
            Self::OneHour => "1 hour",
            Self::FifteenMinutes => "15 minutes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_with_flags(h24: bool, h1: bool, m15: bool) -> Booking {
        Booking {
            id: BookingId::new(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            school_year: "11".to_string(),
            hours_per_week: "2".to_string(),
            date: Utc::now() + Duration::hours(24),
            code_id: CodeId::new(),
            email_24h_sent: h24,
            email_1h_sent: h1,
            email_15m_sent: m15,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_24h_window_bounds() {
        let w = ReminderWindow::TwentyFourHours;
        assert!(w.contains(Duration::hours(24)));
        assert!(w.contains(Duration::minutes(23 * 60 + 50)));
        // exactly 23.75h is outside (exclusive lower bound)
        assert!(!w.contains(Duration::minutes(23 * 60 + 45)));
        assert!(!w.contains(Duration::hours(24) + Duration::seconds(1)));
        assert!(!w.contains(Duration::hours(23)));
    }

    #[test]
    fn test_1h_window_bounds() {
        let w = ReminderWindow::OneHour;
        assert!(w.contains(Duration::hours(1)));
        assert!(w.contains(Duration::minutes(50)));
        assert!(!w.contains(Duration::minutes(45)));
        assert!(!w.contains(Duration::minutes(61)));
    }

    #[test]
    fn test_15m_window_bounds() {
        let w = ReminderWindow::FifteenMinutes;
        assert!(w.contains(Duration::minutes(15)));
        assert!(w.contains(Duration::minutes(1)));
        assert!(!w.contains(Duration::zero()));
        assert!(!w.contains(Duration::minutes(16)));
        assert!(!w.contains(Duration::minutes(-5)));
    }

    #[test]
    fn test_windows_are_disjoint_at_one_hour() {
        // A session exactly one hour away is in the 1h window only.
        let until = Duration::hours(1);
        assert!(!ReminderWindow::TwentyFourHours.contains(until));
        assert!(ReminderWindow::OneHour.contains(until));
        assert!(!ReminderWindow::FifteenMinutes.contains(until));
    }

    #[test]
    fn test_already_sent_maps_flags() {
        let booking = booking_with_flags(true, false, true);
        assert!(ReminderWindow::TwentyFourHours.already_sent(&booking));
        assert!(!ReminderWindow::OneHour.already_sent(&booking));
        assert!(ReminderWindow::FifteenMinutes.already_sent(&booking));
    }
}
