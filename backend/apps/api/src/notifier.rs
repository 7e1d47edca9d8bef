//! Notifier selected at startup

use auth::domain::notifier::{Notification, Notifier};
use auth::infra::{LogNotifier, MailjetConfig, MailjetNotifier};
use auth::AuthResult;

/// Mailjet when credentials are configured, log-only otherwise
#[derive(Clone)]
pub enum AppNotifier {
    Mailjet(MailjetNotifier),
    Log(LogNotifier),
}

impl AppNotifier {
    pub fn from_config(mailjet: Option<MailjetConfig>) -> AuthResult<Self> {
        match mailjet {
            Some(config) => Ok(Self::Mailjet(MailjetNotifier::new(config)?)),
            None => Ok(Self::Log(LogNotifier)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mailjet(_) => "mailjet",
            Self::Log(_) => "log",
        }
    }
}

impl Notifier for AppNotifier {
    async fn send(&self, notification: &Notification) -> AuthResult<()> {
        match self {
            Self::Mailjet(notifier) => notifier.send(notification).await,
            Self::Log(notifier) => notifier.send(notification).await,
        }
    }
}
