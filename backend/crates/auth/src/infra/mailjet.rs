//! Mailjet Notifier
//!
//! Delivers notifications through the Mailjet Send API v3.1.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::domain::notifier::{Notification, Notifier};
use crate::error::{AuthError, AuthResult};

const MAILJET_SEND_URL: &str = "https://api.mailjet.com/v3.1/send";

pub const DEFAULT_SENDER_EMAIL: &str = "noreply@kudosapp.com";

const SENDER_NAME: &str = "Kudos";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Mailjet API credentials and sender
#[derive(Debug, Clone)]
pub struct MailjetConfig {
    pub api_key: String,
    pub secret_key: String,
    pub sender_email: String,
}

#[derive(Clone)]
pub struct MailjetNotifier {
    client: Client,
    config: MailjetConfig,
}

impl MailjetNotifier {
    pub fn new(config: MailjetConfig) -> AuthResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AuthError::Internal(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { client, config })
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendRequest<'a> {
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Message<'a> {
    from: Address<'a>,
    to: Vec<Address<'a>>,
    subject: &'a str,
    #[serde(rename = "HTMLPart")]
    html_part: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> SendRequest<'a> {
    fn new(sender_email: &'a str, notification: &'a Notification) -> Self {
        Self {
            messages: [Message {
                from: Address {
                    email: sender_email,
                    name: Some(SENDER_NAME),
                },
                to: notification
                    .recipients
                    .iter()
                    .map(|email| Address {
                        email: email.as_str(),
                        name: None,
                    })
                    .collect(),
                subject: &notification.subject,
                html_part: &notification.html_body,
            }],
        }
    }
}

impl Notifier for MailjetNotifier {
    async fn send(&self, notification: &Notification) -> AuthResult<()> {
        let body = SendRequest::new(&self.config.sender_email, notification);

        let response = self
            .client
            .post(MAILJET_SEND_URL)
            .basic_auth(&self.config.api_key, Some(&self.config.secret_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Notification(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, detail = %detail, "Mailjet rejected the message");
            return Err(AuthError::Notification(format!(
                "Mail service responded with {}",
                status
            )));
        }

        tracing::info!(
            recipients = notification.recipients.len(),
            subject = %notification.subject,
            "Email sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::email::Email;

    #[test]
    fn test_send_request_shape() {
        let notification = Notification {
            recipients: vec![
                Email::new("a@x.com").unwrap(),
                Email::new("b@x.com").unwrap(),
            ],
            subject: "Hi".to_string(),
            html_body: "<p>Hi</p>".to_string(),
        };

        let json = serde_json::to_value(SendRequest::new(DEFAULT_SENDER_EMAIL, &notification))
            .unwrap();

        let message = &json["Messages"][0];
        assert_eq!(message["From"]["Email"], DEFAULT_SENDER_EMAIL);
        assert_eq!(message["From"]["Name"], SENDER_NAME);
        assert_eq!(message["To"][1]["Email"], "b@x.com");
        assert!(message["To"][0].get("Name").is_none());
        assert_eq!(message["Subject"], "Hi");
        assert_eq!(message["HTMLPart"], "<p>Hi</p>");
    }
}
