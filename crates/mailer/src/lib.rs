//! Outbound email for account verification and password reset.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport. Configuration is
//! loaded from environment variables; if `SMTP_HOST` is not set,
//! [`MailerConfig::from_env`] returns `None` and no mailer should be
//! constructed (callers then skip delivery instead of failing).
//!
//! Verification and reset links point at the frontend, which calls the API
//! back with the embedded token.

use lettre::message::{header::ContentType, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// MailerConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@helpdesk.local";

/// Default frontend base when `FRONTEND_BASE_URL` is not set.
const DEFAULT_FRONTEND_BASE_URL: &str = "http://localhost:5173";

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
    /// Public frontend base URL used to build confirmation/reset links.
    pub frontend_base_url: String,
}

impl MailerConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable            | Required | Default                    |
    /// |---------------------|----------|----------------------------|
    /// | `SMTP_HOST`         | yes      | --                         |
    /// | `SMTP_PORT`         | no       | `587`                      |
    /// | `SMTP_FROM`         | no       | `noreply@helpdesk.local`   |
    /// | `SMTP_USER`         | no       | --                         |
    /// | `SMTP_PASSWORD`     | no       | --                         |
    /// | `FRONTEND_BASE_URL` | no       | `http://localhost:5173`    |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            frontend_base_url: std::env::var("FRONTEND_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_BASE_URL.to_string()),
        })
    }
}

/// Join a base URL and a path without producing doubled slashes.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends account-lifecycle emails via SMTP.
pub struct Mailer {
    config: MailerConfig,
}

impl Mailer {
    /// Create a new mailer with the given configuration.
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    /// Send an HTML + plain-text email to the given address.
    pub async fn send(
        &self,
        to_email: &str,
        subject: &str,
        html: String,
        text: String,
    ) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html),
                    ),
            )
            .map_err(|e| MailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = to_email, subject, "Email sent");
        Ok(())
    }

    /// Send the account verification email with a confirm link.
    pub async fn send_verification(&self, to_email: &str, token: &str) -> Result<(), MailError> {
        let url = join_url(&self.config.frontend_base_url, &format!("confirm/{token}"));
        let html = format!(
            "<h2>Confirm your account</h2>\
             <p>To activate your account, click the link below:</p>\
             <p><a href=\"{url}\">{url}</a></p>\
             <p>If you did not create this account, ignore this message.</p>"
        );
        let text = format!("Confirm your account by visiting: {url}");
        self.send(to_email, "Verify your account", html, text).await
    }

    /// Send the password reset email with a reset link.
    pub async fn send_password_reset(
        &self,
        to_email: &str,
        token: &str,
    ) -> Result<(), MailError> {
        let url = join_url(&self.config.frontend_base_url, &format!("reset/{token}"));
        let html = format!(
            "<h2>Recover your access</h2>\
             <p>Use this link to set a new password:</p>\
             <p><a href=\"{url}\">{url}</a></p>\
             <p>If you did not request this change, you can ignore this message.</p>"
        );
        let text = format!("Recover your access by visiting: {url}");
        self.send(to_email, "Reset your password", html, text).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
