//! Email sink contract and SMTP implementation.
//!
//! Uses `lettre` for SMTP transport. Dispatch is fire-and-forget from the
//! caller's perspective; failures are reported but never retried here.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType, transport::smtp::authentication::Credentials,
};
use thiserror::Error;

use crate::config::EmailConfig;

/// Email service errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    BuildError(String),
    /// Failed to send email.
    #[error("Failed to send email: {0}")]
    SendError(String),
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// Sink for outgoing notification emails.
///
/// Implemented by `SmtpMailer` for production delivery and by in-memory
/// doubles in tests.
pub trait EmailSink: Send + Sync {
    /// Sends a plain-text email.
    fn send(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> impl std::future::Future<Output = Result<(), EmailError>> + Send;
}

/// SMTP-backed email sink.
#[derive(Clone)]
pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    /// Creates a new SMTP mailer.
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Creates an SMTP transport.
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
            .map_err(|e| EmailError::SendError(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build();

        Ok(transport)
    }

    /// Builds the message without sending it.
    fn build_message(&self, to: &str, subject: &str, body: &str) -> Result<Message, EmailError> {
        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        Message::builder()
            .from(
                from.parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| EmailError::BuildError(e.to_string()))
    }
}

impl EmailSink for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        let email = self.build_message(to, subject, body)?;

        let transport = self.create_transport()?;
        transport
            .send(email)
            .await
            .map_err(|e| EmailError::SendError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_message_valid_address() {
        let mailer = SmtpMailer::new(EmailConfig::default());
        let message = mailer.build_message("user@example.com", "Subject", "Body");
        assert!(message.is_ok());
    }

    #[test]
    fn test_build_message_invalid_address() {
        let mailer = SmtpMailer::new(EmailConfig::default());
        let result = mailer.build_message("not an address", "Subject", "Body");
        assert!(matches!(result, Err(EmailError::InvalidAddress(_))));
    }
}
