//! Environment-driven server configuration.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use tutoria_booking::{ReminderConfig, Secrets};

/// Default sender identity when none is configured.
const DEFAULT_EMAIL_FROM: &str = "Tutoria <onboarding@resend.dev>";

/// Which email transport to use.
#[derive(Debug, Clone)]
pub enum EmailSettings {
    /// Resend transactional API.
    Resend {
        /// API key.
        api_key: String,
        /// Sender, as `Name <address>`.
        from: String,
    },

    /// SMTP relay via Lettre.
    Smtp {
        /// Relay host.
        server: String,
        /// Relay port.
        port: u16,
        /// Auth username.
        username: String,
        /// Auth password.
        password: String,
        /// Sender address.
        from_email: String,
        /// Sender display name.
        from_name: String,
    },

    /// No transport configured; emails are logged instead of sent.
    Console,
}

/// Full server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Admin and cron shared secrets.
    pub secrets: Secrets,

    /// Operator notification address.
    pub operator_email: Option<String>,

    /// Email transport selection.
    pub email: EmailSettings,

    /// Reminder dispatch configuration.
    pub reminder: ReminderConfig,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `DATABASE_URL` is required. Missing shared secrets do not prevent
    /// startup — the corresponding endpoints fail with a configuration
    /// error at request time. A missing email API key selects the console
    /// transport instead of failing.
    ///
    /// # Errors
    ///
    /// Returns error if `DATABASE_URL` is absent, `BIND_ADDR` or
    /// `SMTP_PORT` fail to parse, or the reminder cadence violates the
    /// window-width invariant.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is required")?;

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be host:port")?;

        let mut secrets = Secrets::new();
        match env::var("ADMIN_SECRET_KEY") {
            Ok(key) => secrets = secrets.with_admin_key(key),
            Err(_) => tracing::warn!("ADMIN_SECRET_KEY not set; code issuance will fail"),
        }
        match env::var("CRON_SECRET") {
            Ok(secret) => secrets = secrets.with_cron_secret(secret),
            Err(_) => tracing::warn!("CRON_SECRET not set; the reminder job will fail"),
        }

        let operator_email = env::var("ADMIN_EMAIL").ok();
        if operator_email.is_none() {
            tracing::warn!("ADMIN_EMAIL not set; operator notifications disabled");
        }

        let email = Self::email_from_env()?;

        let mut reminder = ReminderConfig::new();
        if let Ok(raw) = env::var("REMINDER_CADENCE_MINUTES") {
            let minutes = raw
                .parse::<i64>()
                .context("REMINDER_CADENCE_MINUTES must be an integer")?;
            reminder = reminder.with_expected_cadence(minutes);
        }
        reminder
            .validate()
            .context("invalid reminder configuration")?;

        Ok(Self {
            bind_addr,
            database_url,
            secrets,
            operator_email,
            email,
            reminder,
        })
    }

    /// Pick the email transport: Resend if an API key is present, SMTP if
    /// a relay is configured, console otherwise.
    fn email_from_env() -> Result<EmailSettings> {
        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            let from = env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_EMAIL_FROM.to_string());
            return Ok(EmailSettings::Resend { api_key, from });
        }

        if let Ok(server) = env::var("SMTP_SERVER") {
            let port = env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse::<u16>()
                .context("SMTP_PORT must be a port number")?;
            return Ok(EmailSettings::Smtp {
                server,
                port,
                username: env::var("SMTP_USERNAME").context("SMTP_USERNAME is required")?,
                password: env::var("SMTP_PASSWORD").context("SMTP_PASSWORD is required")?,
                from_email: env::var("SMTP_FROM_EMAIL").context("SMTP_FROM_EMAIL is required")?,
                from_name: env::var("SMTP_FROM_NAME").unwrap_or_else(|_| "Tutoria".to_string()),
            });
        }

        Ok(EmailSettings::Console)
    }
}
