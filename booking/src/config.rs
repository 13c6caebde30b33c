//! Service configuration.
//!
//! Configuration values are provided by the application (the server binary
//! reads them from the environment), not hardcoded here.

use crate::error::{BookingError, Result};
use crate::model::ReminderWindow;

/// Shared secrets gating the admin and cron surfaces.
///
/// Both are optional: a missing secret does not prevent startup, it makes
/// the corresponding endpoint fail with a `Configuration` error at request
/// time.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    /// Secret required to mint access codes.
    pub admin_key: Option<String>,

    /// Secret required to trigger the reminder job.
    pub cron_secret: Option<String>,
}

impl Secrets {
    /// Create an empty secrets set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            admin_key: None,
            cron_secret: None,
        }
    }

    /// Set the admin key.
    #[must_use]
    pub fn with_admin_key(mut self, key: impl Into<String>) -> Self {
        self.admin_key = Some(key.into());
        self
    }

    /// Set the cron secret.
    #[must_use]
    pub fn with_cron_secret(mut self, secret: impl Into<String>) -> Self {
        self.cron_secret = Some(secret.into());
        self
    }
}

/// Reminder dispatch configuration.
///
/// The three reminder windows are each [`ReminderWindow::WIDTH_MINUTES`]
/// wide. A reminder fires only if the job runs while the session sits
/// inside a window, so the external scheduler must run at least once per
/// window width or reminders are silently skipped. That coupling is
/// implicit in the window math; this type makes it an explicit, validated
/// invariant.
#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// Cadence the external scheduler is expected to honor, in minutes.
    ///
    /// Default: 5 minutes.
    pub expected_cadence_minutes: i64,
}

impl ReminderConfig {
    /// Create a reminder configuration with the default cadence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expected_cadence_minutes: 5,
        }
    }

    /// Set the expected scheduler cadence.
    #[must_use]
    pub const fn with_expected_cadence(mut self, minutes: i64) -> Self {
        self.expected_cadence_minutes = minutes;
        self
    }

    /// Check the cadence against the window width.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the cadence is non-positive or coarser
    /// than the reminder window width, in which case windows could elapse
    /// between two job runs and their reminders would never fire.
    pub fn validate(&self) -> Result<()> {
        if self.expected_cadence_minutes <= 0 {
            return Err(BookingError::Configuration(
                "reminder cadence must be positive".to_string(),
            ));
        }
        if self.expected_cadence_minutes > ReminderWindow::WIDTH_MINUTES {
            return Err(BookingError::Configuration(format!(
                "reminder cadence of {} minutes exceeds the {}-minute reminder window; \
                 reminders would be silently skipped",
                self.expected_cadence_minutes,
                ReminderWindow::WIDTH_MINUTES,
            )));
        }
        Ok(())
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_builder() {
        let secrets = Secrets::new()
            .with_admin_key("admin-secret")
            .with_cron_secret("cron-secret");

        assert_eq!(secrets.admin_key.as_deref(), Some("admin-secret"));
        assert_eq!(secrets.cron_secret.as_deref(), Some("cron-secret"));
    }

    #[test]
    fn test_default_cadence_is_valid() {
        assert!(ReminderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_cadence_at_window_width_is_valid() {
        let config = ReminderConfig::new().with_expected_cadence(ReminderWindow::WIDTH_MINUTES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cadence_coarser_than_window_is_rejected() {
        let config = ReminderConfig::new().with_expected_cadence(30);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BookingError::Configuration(_)));
    }

    #[test]
    fn test_non_positive_cadence_is_rejected() {
        assert!(ReminderConfig::new().with_expected_cadence(0).validate().is_err());
        assert!(ReminderConfig::new().with_expected_cadence(-5).validate().is_err());
    }
}
