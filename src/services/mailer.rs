//! Startup welcome notification over SMTP.
//!
//! Uses an async `lettre` transport with STARTTLS and the sender's
//! credentials. Failures are reported to the caller, which only logs them.

use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::AsyncSmtpTransport;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncTransport, Tokio1Executor};
use thiserror::Error;

use crate::config::MailConfig;

const WELCOME_SUBJECT: &str = "Welcome";
const WELCOME_BODY: &str = "Welcome!";

/// Errors raised while preparing or sending the welcome email
#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail setting `{0}` is not set")]
    MissingSetting(&'static str),

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sends the one-off welcome email configured under `[mail]`.
pub struct WelcomeMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl WelcomeMailer {
    /// Builds the transport and mailboxes from settings.
    ///
    /// # Errors
    ///
    /// `MailError::MissingSetting` when the sender, password, host or
    /// recipient is empty; `MailError::Address` for unparsable addresses.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let sender_email = required(&config.sender_email, "mail.sender_email")?;
        let password = required(&config.sender_password, "mail.sender_password")?;
        let host = required(&config.smtp_host, "mail.smtp_host")?;
        let recipient = required(&config.welcome_recipient, "mail.welcome_recipient")?;

        let sender: Mailbox = sender_email.parse()?;
        let recipient: Mailbox = recipient.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                sender_email.to_string(),
                password.to_string(),
            ))
            .build();

        Ok(Self {
            transport,
            sender,
            recipient,
        })
    }

    /// Sends the welcome message.
    pub async fn send_welcome(&self) -> Result<(), MailError> {
        let message = welcome_message(&self.sender, &self.recipient)?;
        self.transport.send(message).await?;
        tracing::info!(recipient = %self.recipient, "Welcome email sent");
        Ok(())
    }
}

/// Builds the plain-text welcome message.
pub fn welcome_message(sender: &Mailbox, recipient: &Mailbox) -> Result<Message, MailError> {
    let message = Message::builder()
        .from(sender.clone())
        .to(recipient.clone())
        .subject(WELCOME_SUBJECT)
        .header(ContentType::TEXT_PLAIN)
        .body(WELCOME_BODY.to_string())?;
    Ok(message)
}

fn required<'a>(value: &'a str, key: &'static str) -> Result<&'a str, MailError> {
    let value = value.trim();
    if value.is_empty() {
        Err(MailError::MissingSetting(key))
    } else {
        Ok(value)
    }
}
