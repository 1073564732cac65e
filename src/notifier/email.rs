use async_trait::async_trait;
use lettre::message::{header, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

use crate::config::SmtpSettings;
use crate::models::DeliveryResult;
use crate::notifier::Notifier;
use crate::utils::error::DeliveryError;

pub const DEFAULT_SMTP_PORT: u16 = 587;
const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// A complete set of SMTP settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpChannel {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
    pub to: Vec<String>,
}

impl SmtpChannel {
    /// Returns `None` unless server, credentials and at least one recipient
    /// are present. Blank values count as missing.
    pub fn resolve(settings: &SmtpSettings) -> Option<Self> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let server = present(&settings.server)?;
        let username = present(&settings.username)?;
        let password = settings.password.clone().filter(|p| !p.is_empty())?;
        let from = present(&settings.from).unwrap_or_else(|| username.clone());
        let to: Vec<String> = present(&settings.to)?
            .split(',')
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
            .map(str::to_string)
            .collect();

        if to.is_empty() {
            return None;
        }

        Some(Self {
            server,
            port: settings.port.unwrap_or(DEFAULT_SMTP_PORT),
            username,
            password,
            from,
            to,
        })
    }
}

/// Sends the report as a plain-text email over STARTTLS.
pub struct EmailNotifier {
    channel: Option<SmtpChannel>,
    timeout: Duration,
}

impl EmailNotifier {
    pub fn new(settings: &SmtpSettings) -> Self {
        Self::with_channel(SmtpChannel::resolve(settings))
    }

    pub fn with_channel(channel: Option<SmtpChannel>) -> Self {
        EmailNotifier {
            channel,
            timeout: SMTP_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.channel.is_some()
    }

    fn build_message(
        &self,
        channel: &SmtpChannel,
        subject: &str,
        body: &str,
    ) -> Result<Message, DeliveryError> {
        let parse = |addr: &str| {
            addr.parse::<Mailbox>()
                .map_err(|e| DeliveryError::Address(format!("{}: {}", addr, e)))
        };

        let mut builder = Message::builder()
            .from(parse(&channel.from)?)
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN);
        for recipient in &channel.to {
            builder = builder.to(parse(recipient)?);
        }

        builder
            .body(body.to_string())
            .map_err(|e| DeliveryError::Message(e.to_string()))
    }

    async fn send(&self, channel: &SmtpChannel, message: Message) -> Result<(), DeliveryError> {
        let credentials = Credentials::new(channel.username.clone(), channel.password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&channel.server)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .port(channel.port)
            .credentials(credentials)
            .timeout(Some(self.timeout))
            .build();

        mailer
            .send(message)
            .await
            .map(|_response| ())
            .map_err(|e| DeliveryError::Transport(e.to_string()))
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn name(&self) -> &str {
        "email"
    }

    async fn deliver(&self, subject: &str, body: &str) -> DeliveryResult {
        let Some(channel) = &self.channel else {
            tracing::info!("SMTP settings incomplete; skipping send");
            return DeliveryResult::unconfigured(body);
        };

        let result = match self.build_message(channel, subject, body) {
            Ok(message) => self.send(channel, message).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    "Sent '{}' via {}:{} to {} recipient(s)",
                    subject,
                    channel.server,
                    channel.port,
                    channel.to.len()
                );
                DeliveryResult::delivered(body)
            }
            Err(e) => {
                tracing::error!("Failed to send '{}' via {}: {}", subject, channel.server, e);
                DeliveryResult::rejected(body, e)
            }
        }
    }
}
