//! Contact notification delivery
//!
//! A [`NotificationDispatcher`] formats a contact submission and hands it to a
//! [`Mailer`]. Delivery is reported as a [`Delivery`] value rather than an
//! error: a stored submission stays stored whatever the relay does.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::MailConfig;

#[derive(Debug, Error)]
pub enum NotificationError {
    /// Relay settings absent or unusable; carries the reason
    #[error("Email relay not configured ({0})")]
    NotConfigured(String),

    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// The plain-text message sent for one contact submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactNotification {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactNotification {
    pub fn subject_line(&self) -> String {
        format!("Portfolio Contact Form: {}", self.subject)
    }

    pub fn body(&self) -> String {
        format!(
            "You received a new message from your portfolio contact form:\n\n\
             Name: {}\n\
             Email: {}\n\
             Subject: {}\n\
             Message:\n{}\n",
            self.name, self.email, self.subject, self.message
        )
    }
}

/// Outbound mail collaborator.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, notification: &ContactNotification) -> Result<(), NotificationError>;
}

struct Relay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

/// SMTP relay built once at startup from [`MailConfig`].
///
/// Building never fails: when the settings cannot produce a relay the
/// reason is kept and every send reports it as
/// [`NotificationError::NotConfigured`].
pub struct SmtpMailer {
    relay: Result<Relay, String>,
}

impl SmtpMailer {
    pub fn from_config(config: &MailConfig) -> Self {
        let relay = Self::build_relay(config);
        match &relay {
            Ok(_) => info!("Mail relay configured: {}:{}", config.host, config.port),
            Err(reason) => warn!(
                "Mail relay unavailable ({}); contact notifications will not be sent",
                reason
            ),
        }
        Self { relay }
    }

    fn build_relay(config: &MailConfig) -> Result<Relay, String> {
        let (Some(recipient), Some(username), Some(password)) =
            (&config.recipient, &config.username, &config.password)
        else {
            return Err(format!("missing {}", config.missing_keys().join(", ")));
        };

        let to = recipient
            .parse::<Mailbox>()
            .map_err(|err| format!("invalid {}: {}", MailConfig::RECIPIENT_KEY, err))?;
        let from = username
            .parse::<Mailbox>()
            .map_err(|err| format!("invalid {}: {}", MailConfig::USERNAME_KEY, err))?;

        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        }
        .map_err(|err| format!("invalid {} '{}': {}", MailConfig::HOST_KEY, config.host, err))?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(username.clone(), password.clone()))
            .timeout(Some(config.timeout))
            .build();

        Ok(Relay { transport, from, to })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, notification: &ContactNotification) -> Result<(), NotificationError> {
        let relay = self
            .relay
            .as_ref()
            .map_err(|reason| NotificationError::NotConfigured(reason.clone()))?;

        let reply_to = Mailbox::new(
            Some(notification.name.clone()),
            notification.email.parse::<Address>()?,
        );
        let email = Message::builder()
            .from(relay.from.clone())
            .reply_to(reply_to)
            .to(relay.to.clone())
            .subject(notification.subject_line())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body())?;

        relay.transport.send(email).await?;
        Ok(())
    }
}

/// Keeps every notification in memory instead of sending it.
#[derive(Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<ContactNotification>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<ContactNotification> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, notification: &ContactNotification) -> Result<(), NotificationError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(notification.clone());
        }
        Ok(())
    }
}

/// Outcome of one notification attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Failed(String),
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered)
    }
}

#[derive(Clone)]
pub struct NotificationDispatcher {
    mailer: Arc<dyn Mailer>,
}

impl NotificationDispatcher {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Sends the notification and waits for the relay's answer. Failures are
    /// logged and returned as [`Delivery::Failed`], never propagated.
    pub async fn notify(&self, notification: &ContactNotification) -> Delivery {
        match self.mailer.send(notification).await {
            Ok(()) => {
                debug!("Contact notification delivered for {}", notification.email);
                Delivery::Delivered
            }
            Err(err) => {
                warn!(
                    operation = "contact_notification",
                    sender = %notification.email,
                    error = %err,
                    "Failed to deliver contact notification"
                );
                Delivery::Failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification() -> ContactNotification {
        ContactNotification {
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@techcorp.com".to_string(),
            subject: "Collaboration Opportunity".to_string(),
            message: "Could we schedule a call this week?".to_string(),
        }
    }

    #[test]
    fn formats_subject_and_body() {
        let n = notification();
        assert_eq!(n.subject_line(), "Portfolio Contact Form: Collaboration Opportunity");

        let body = n.body();
        assert!(body.contains("Name: Sarah Johnson"));
        assert!(body.contains("Email: sarah.johnson@techcorp.com"));
        assert!(body.contains("Subject: Collaboration Opportunity"));
        assert!(body.ends_with("Could we schedule a call this week?\n"));
    }

    #[tokio::test]
    async fn unconfigured_relay_fails_at_send_time() {
        let config = MailConfig::from_map(&Default::default());
        let mailer = SmtpMailer::from_config(&config);

        let err = mailer.send(&notification()).await.unwrap_err();
        assert!(matches!(err, NotificationError::NotConfigured(_)));
        assert!(err.to_string().contains("EMAIL_PASSWORD"));
    }

    #[tokio::test]
    async fn unparsable_addresses_fail_at_send_time() {
        let config = |user: &str, to: &str| {
            MailConfig::from_map(
                &[
                    ("EMAIL_TO", to),
                    ("EMAIL_USER", user),
                    ("EMAIL_PASSWORD", "app-password"),
                ]
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            )
        };

        let mailer = SmtpMailer::from_config(&config("apikey", "owner@example.com"));
        let err = mailer.send(&notification()).await.unwrap_err();
        assert!(matches!(err, NotificationError::NotConfigured(_)));
        assert!(err.to_string().contains("EMAIL_USER"));

        let mailer = SmtpMailer::from_config(&config("relay@example.com", "not an address"));
        let err = mailer.send(&notification()).await.unwrap_err();
        assert!(err.to_string().contains("EMAIL_TO"));
    }

    #[tokio::test]
    async fn dispatcher_reports_failure_without_error() {
        let config = MailConfig::from_map(&Default::default());
        let dispatcher =
            NotificationDispatcher::new(Arc::new(SmtpMailer::from_config(&config)));

        let delivery = dispatcher.notify(&notification()).await;
        assert!(!delivery.is_delivered());
    }

    #[tokio::test]
    async fn memory_mailer_records_notifications() {
        let mailer = Arc::new(MemoryMailer::new());
        let dispatcher = NotificationDispatcher::new(mailer.clone());

        assert_eq!(dispatcher.notify(&notification()).await, Delivery::Delivered);
        assert_eq!(mailer.sent(), vec![notification()]);
    }
}
