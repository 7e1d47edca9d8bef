//! Notifier
//!
//! Outbound notifications about account activation. Delivery is an external
//! collaborator (email API); the messages themselves are built here.

use crate::domain::entity::user::User;
use crate::domain::value_object::{activation_status::ActivationDecision, email::Email};
use crate::error::AuthResult;

/// A message to one or more members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipients: Vec<Email>,
    pub subject: String,
    pub html_body: String,
}

impl Notification {
    /// Tell admins a team lead is waiting for approval
    pub fn team_lead_signup(admins: &[User], team_lead: &User) -> Self {
        Self {
            recipients: admins.iter().map(|admin| admin.email.clone()).collect(),
            subject: "New team lead signup request".to_string(),
            html_body: format!(
                "<p>{} ({}) signed up as a team lead and is waiting for approval.</p>",
                team_lead.name, team_lead.email
            ),
        }
    }

    /// Tell a team lead how their request was resolved
    pub fn team_lead_decision(member: &User, decision: ActivationDecision) -> Self {
        let (subject, body) = match decision {
            ActivationDecision::Approved => (
                "Your team lead account has been approved",
                "Your team lead account has been approved. You can now log in.",
            ),
            ActivationDecision::Rejected => (
                "Your team lead request has been rejected",
                "Your team lead request has been rejected by an administrator.",
            ),
        };

        Self {
            recipients: vec![member.email.clone()],
            subject: subject.to_string(),
            html_body: format!("<p>Hello {},</p><p>{}</p>", member.name, body),
        }
    }
}

/// Notification delivery
#[trait_variant::make(Notifier: Send)]
pub trait LocalNotifier {
    /// Deliver the message; failures surface as `AuthError::Notification`
    async fn send(&self, notification: &Notification) -> AuthResult<()>;
}
