//! Log Notifier
//!
//! Stand-in when no mail credentials are configured: notifications are only
//! written to the log.

use crate::domain::notifier::{Notification, Notifier};
use crate::error::AuthResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn send(&self, notification: &Notification) -> AuthResult<()> {
        let recipients: Vec<&str> = notification.recipients.iter().map(|e| e.as_str()).collect();
        tracing::info!(
            recipients = ?recipients,
            subject = %notification.subject,
            "Email delivery disabled; notification logged only"
        );
        Ok(())
    }
}
