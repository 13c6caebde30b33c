//! Booking creation.

use crate::environment::Environment;
use crate::error::{BookingError, Result};
use crate::model::Booking;
use crate::providers::{AccessCodeStore, BookingStore, EmailProvider, NewBooking};
use crate::utils;
use chrono::Utc;

/// Create a booking, consuming its access code.
///
/// The code is re-fetched by identifier (the validation response may be
/// stale), then consumed through the store's compare-and-swap before the
/// booking row is written: of two concurrent submissions referencing the
/// same code, exactly one wins and the loser fails with `CodeAlreadyUsed`
/// without writing anything.
///
/// Confirmation and operator emails are best-effort: failures are logged
/// and swallowed, never failing the creation.
///
/// # Errors
///
/// - `Validation` if a requester field is blank or the email is malformed.
/// - `CodeNotFound` if the identifier matches no code.
/// - `CodeAlreadyUsed` if the code was consumed (before or during this
///   call).
/// - `Database` on store failure.
pub async fn create_booking<C, B, E>(env: &Environment<C, B, E>, new: NewBooking) -> Result<Booking>
where
    C: AccessCodeStore + Clone,
    B: BookingStore + Clone,
    E: EmailProvider + Clone,
{
    validate_request(&new)?;

    let Some(access_code) = env.codes.find_by_id(new.code_id).await? else {
        return Err(BookingError::CodeNotFound);
    };
    if access_code.is_used {
        return Err(BookingError::CodeAlreadyUsed);
    }

    // Claim the code first. The conditional update admits exactly one
    // winner, so a submission that loses the race writes no booking.
    if !env.codes.consume(access_code.id, Utc::now()).await? {
        return Err(BookingError::CodeAlreadyUsed);
    }

    let booking = env.bookings.create(new).await?;
    tracing::info!(
        booking_id = %booking.id.0,
        code_id = %booking.code_id.0,
        date = %booking.date,
        "booking created"
    );

    if let Err(e) = env.email.send_booking_confirmation(&booking).await {
        tracing::warn!(booking_id = %booking.id.0, error = %e, "confirmation email failed");
    }
    if let Some(operator) = env.operator_email.as_deref() {
        if let Err(e) = env.email.send_operator_notification(operator, &booking).await {
            tracing::warn!(booking_id = %booking.id.0, error = %e, "operator notification failed");
        }
    }

    Ok(booking)
}

/// Presence-and-shape checks on requester attributes.
fn validate_request(new: &NewBooking) -> Result<()> {
    let blank = |s: &str| s.trim().is_empty();

    if blank(&new.name) {
        return Err(BookingError::Validation("name is required".to_string()));
    }
    if blank(&new.email) {
        return Err(BookingError::Validation("email is required".to_string()));
    }
    if !utils::is_valid_email(&new.email) {
        return Err(BookingError::Validation(
            "email address is not valid".to_string(),
        ));
    }
    if blank(&new.school_year) {
        return Err(BookingError::Validation(
            "school year is required".to_string(),
        ));
    }
    if blank(&new.hours_per_week) {
        return Err(BookingError::Validation(
            "hours per week is required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CodeId;
    use chrono::Duration;

    fn request() -> NewBooking {
        NewBooking {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            school_year: "11".to_string(),
            hours_per_week: "2".to_string(),
            date: Utc::now() + Duration::days(3),
            code_id: CodeId::new(),
        }
    }

    #[test]
    fn test_complete_request_passes() {
        assert!(validate_request(&request()).is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        for field in ["name", "email", "school_year", "hours_per_week"] {
            let mut new = request();
            match field {
                "name" => new.name = "  ".to_string(),
                "email" => new.email = String::new(),
                "school_year" => new.school_year = String::new(),
                _ => new.hours_per_week = String::new(),
            }
            assert!(
                matches!(validate_request(&new), Err(BookingError::Validation(_))),
                "expected {field} to be required"
            );
        }
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut new = request();
        new.email = "not-an-address".to_string();
        assert!(matches!(
            validate_request(&new),
            Err(BookingError::Validation(_))
        ));
    }
}
