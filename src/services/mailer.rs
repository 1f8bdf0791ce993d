//! SMTP delivery of the HTML report

use crate::config::MailConfig;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::{Category, Code, Detail, Severity};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("authentication failed, check sender email and password: {0}")]
    Authentication(String),

    #[error("SMTP error: {0}")]
    Transport(String),

    #[error("invalid message: {0}")]
    Message(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, config: &MailConfig, mail: &OutgoingMail) -> Result<(), MailError>;
}

/// STARTTLS relay with username/password login
pub struct SmtpMailer {
    timeout: Duration,
}

impl SmtpMailer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SmtpMailer {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, config: &MailConfig, mail: &OutgoingMail) -> Result<(), MailError> {
        let message = build_message(config, mail)?;

        let credentials = Credentials::new(
            config.sender_email.clone(),
            config.sender_password.clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(credentials)
            .timeout(Some(self.timeout))
            .build();

        transport.send(message).await.map_err(classify_smtp_error)?;

        info!(
            recipient = %config.recipient_email,
            server = %config.smtp_server,
            port = config.smtp_port,
            "Email sent successfully to {}",
            config.recipient_email
        );
        Ok(())
    }
}

pub fn build_message(config: &MailConfig, mail: &OutgoingMail) -> Result<Message, MailError> {
    let from: Mailbox = config
        .sender_email
        .parse()
        .map_err(|e| MailError::Message(format!("invalid sender address: {}", e)))?;
    let to: Mailbox = config
        .recipient_email
        .parse()
        .map_err(|e| MailError::Message(format!("invalid recipient address: {}", e)))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(mail.subject.as_str())
        .header(ContentType::TEXT_HTML)
        .body(mail.html_body.clone())
        .map_err(|e| MailError::Message(e.to_string()))
}

/// 534/535: login rejected for bad credentials or a missing app password
pub fn is_auth_rejection(code: Code) -> bool {
    matches!(
        (code.severity, code.category, code.detail),
        (
            Severity::PermanentNegativeCompletion,
            Category::Unspecified3,
            Detail::Four | Detail::Five
        )
    )
}

fn classify_smtp_error(err: lettre::transport::smtp::Error) -> MailError {
    if err.status().map(is_auth_rejection).unwrap_or(false) {
        MailError::Authentication(err.to_string())
    } else {
        MailError::Transport(err.to_string())
    }
}
