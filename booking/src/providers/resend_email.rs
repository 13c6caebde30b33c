//! Transactional-email provider backed by the Resend HTTP API.

use crate::error::{BookingError, Result};
use crate::model::{Booking, ReminderWindow};
use crate::providers::{templates, EmailProvider};
use serde::Serialize;

/// Resend API endpoint for sending emails.
const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Email provider that delivers through the Resend transactional API.
///
/// Suitable for production use; requires an API key.
///
/// # Examples
///
/// ```ignore
/// use tutoria_booking::providers::ResendEmailProvider;
///
/// let provider = ResendEmailProvider::new(
///     "re_123...".to_string(),
///     "Tutoria <onboarding@resend.dev>".to_string(),
/// );
/// ```
#[derive(Clone)]
pub struct ResendEmailProvider {
    /// Shared HTTP client.
    client: reqwest::Client,

    /// Resend API key.
    api_key: String,

    /// Sender, as `Name <address>`.
    from: String,
}

/// Request body for the Resend send-email endpoint.
#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

impl ResendEmailProvider {
    /// Create a new Resend provider.
    #[must_use]
    pub fn new(api_key: String, from: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            from,
        }
    }

    /// Post one email to the Resend API.
    async fn post_email(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        let body = SendEmailBody {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BookingError::Email(format!("Resend request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(BookingError::Email(format!(
                "Resend rejected email ({status}): {detail}"
            )));
        }

        Ok(())
    }
}

impl EmailProvider for ResendEmailProvider {
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<()> {
        self.post_email(
            &booking.email,
            templates::confirmation_subject(),
            &templates::confirmation_html(booking),
        )
        .await
    }

    async fn send_operator_notification(&self, to: &str, booking: &Booking) -> Result<()> {
        self.post_email(
            to,
            &templates::operator_notification_subject(booking),
            &templates::operator_notification_html(booking),
        )
        .await
    }

    async fn send_reminder(&self, booking: &Booking, window: ReminderWindow) -> Result<()> {
        self.post_email(
            &booking.email,
            &templates::reminder_subject(window),
            &templates::reminder_html(booking, window),
        )
        .await
    }

    async fn send_operator_reminder(
        &self,
        to: &str,
        booking: &Booking,
        window: ReminderWindow,
    ) -> Result<()> {
        self.post_email(
            to,
            &templates::operator_reminder_subject(booking, window),
            &templates::operator_reminder_html(booking, window),
        )
        .await
    }
}
