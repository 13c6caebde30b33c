//! Error types for booking and access-code operations.

use thiserror::Error;

/// Result type alias for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;

/// Error taxonomy for the booking service.
///
/// Covers every failure mode of the service operations, organized so the
/// HTTP layer can map each variant to a status code without inspecting
/// message text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Caller-supplied shared secret did not match.
    #[error("Unauthorized")]
    Unauthorized,

    /// A required secret or key is missing from the server configuration.
    #[error("Server configuration error: {0}")]
    Configuration(String),

    /// No access code matches the submitted string.
    #[error("Invalid access code")]
    CodeInvalid,

    /// The access code exists but was already consumed by a booking.
    #[error("This access code has already been used")]
    CodeAlreadyUsed,

    /// No access code matches the submitted identifier.
    #[error("Access code not found")]
    CodeNotFound,

    /// A requester-supplied field is missing or malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Email delivery failed.
    #[error("Failed to send email: {0}")]
    Email(String),
}

impl BookingError {
    /// Returns `true` if this error is due to invalid user input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tutoria_booking::BookingError;
    /// assert!(BookingError::CodeInvalid.is_user_error());
    /// assert!(!BookingError::Database("down".into()).is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::CodeInvalid
                | Self::CodeAlreadyUsed
                | Self::CodeNotFound
                | Self::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(BookingError::CodeInvalid.is_user_error());
        assert!(BookingError::CodeAlreadyUsed.is_user_error());
        assert!(BookingError::Validation("name is required".into()).is_user_error());
        assert!(!BookingError::Unauthorized.is_user_error());
        assert!(!BookingError::Configuration("ADMIN_SECRET_KEY".into()).is_user_error());
        assert!(!BookingError::Email("timeout".into()).is_user_error());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(BookingError::CodeInvalid.to_string(), "Invalid access code");
        assert_eq!(
            BookingError::CodeAlreadyUsed.to_string(),
            "This access code has already been used"
        );
    }
}
