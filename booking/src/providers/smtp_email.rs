//! SMTP email provider implementation using Lettre.

use crate::error::{BookingError, Result};
use crate::model::{Booking, ReminderWindow};
use crate::providers::{templates, EmailProvider};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// SMTP email provider using Lettre.
///
/// Sends real emails via an SMTP relay, for deployments that prefer their
/// own mail server over a transactional API.
///
/// # Examples
///
/// ```ignore
/// use tutoria_booking::providers::SmtpEmailProvider;
///
/// let provider = SmtpEmailProvider::new(
///     "smtp.example.com".to_string(),
///     587,
///     "user@example.com".to_string(),
///     "app_password".to_string(),
///     "noreply@example.com".to_string(),
///     "Tutoria".to_string(),
/// )?;
/// ```
#[derive(Clone)]
pub struct SmtpEmailProvider {
    /// SMTP server address.
    smtp_server: String,

    /// SMTP server port.
    smtp_port: u16,

    /// SMTP credentials.
    credentials: Credentials,

    /// Sender email address.
    from_email: String,

    /// Sender display name.
    from_name: String,
}

impl SmtpEmailProvider {
    /// Create a new SMTP email provider.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(
        smtp_server: String,
        smtp_port: u16,
        smtp_username: String,
        smtp_password: String,
        from_email: String,
        from_name: String,
    ) -> Result<Self> {
        let credentials = Credentials::new(smtp_username, smtp_password);

        Ok(Self {
            smtp_server,
            smtp_port,
            credentials,
            from_email,
            from_name,
        })
    }

    /// Build SMTP transport for sending emails.
    ///
    /// Creates a new transport for each email to avoid connection pooling
    /// issues.
    fn build_transport(&self) -> Result<SmtpTransport> {
        let transport = SmtpTransport::relay(&self.smtp_server)
            .map_err(|e| BookingError::Email(format!("SMTP relay error: {e}")))?
            .port(self.smtp_port)
            .credentials(self.credentials.clone())
            .build();
        Ok(transport)
    }

    /// Build the "From" header.
    fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Build and send one HTML email on a blocking thread.
    async fn send_html(&self, to: &str, subject: &str, html_body: String) -> Result<()> {
        let email = Message::builder()
            .from(
                self.from_header()
                    .parse()
                    .map_err(|e| BookingError::Email(format!("Invalid from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| BookingError::Email(format!("Invalid to address: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)
            .map_err(|e| BookingError::Email(format!("Failed to build email: {e}")))?;

        let mailer = self.build_transport()?;

        tokio::task::spawn_blocking(move || {
            mailer
                .send(&email)
                .map_err(|e| BookingError::Email(format!("Failed to send email: {e}")))
        })
        .await
        .map_err(|e| BookingError::Email(format!("Email task failed: {e}")))?
        .map(|_| ())
    }
}

impl EmailProvider for SmtpEmailProvider {
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<()> {
        self.send_html(
            &booking.email,
            templates::confirmation_subject(),
            templates::confirmation_html(booking),
        )
        .await
    }

    async fn send_operator_notification(&self, to: &str, booking: &Booking) -> Result<()> {
        self.send_html(
            to,
            &templates::operator_notification_subject(booking),
            templates::operator_notification_html(booking),
        )
        .await
    }

    async fn send_reminder(&self, booking: &Booking, window: ReminderWindow) -> Result<()> {
        self.send_html(
            &booking.email,
            &templates::reminder_subject(window),
            templates::reminder_html(booking, window),
        )
        .await
    }

    async fn send_operator_reminder(
        &self,
        to: &str,
        booking: &Booking,
        window: ReminderWindow,
    ) -> Result<()> {
        self.send_html(
            to,
            &templates::operator_reminder_subject(booking, window),
            templates::operator_reminder_html(booking, window),
        )
        .await
    }
}
