//! Handle Team Lead Request Use Case
//!
//! Approves or rejects a pending team-lead signup, then tells the member.

use std::sync::Arc;

use auth::domain::entity::user::User;
use auth::domain::notifier::{Notification, Notifier};
use auth::domain::value_object::{activation_status::ActivationDecision, user_id::UserId};

use crate::domain::repository::MemberRepository;
use crate::error::{AdminError, AdminResult};

pub struct HandleTeamLeadRequestUseCase<M, N>
where
    M: MemberRepository,
    N: Notifier,
{
    member_repo: Arc<M>,
    notifier: Arc<N>,
}

impl<M, N> HandleTeamLeadRequestUseCase<M, N>
where
    M: MemberRepository,
    N: Notifier,
{
    pub fn new(member_repo: Arc<M>, notifier: Arc<N>) -> Self {
        Self {
            member_repo,
            notifier,
        }
    }

    /// The notification is best-effort: a delivery failure is logged and the
    /// decision stands.
    pub async fn execute(&self, member_id: UserId, decision: ActivationDecision) -> AdminResult<User> {
        let member = self
            .member_repo
            .resolve_team_lead_request(member_id, decision)
            .await?
            .ok_or(AdminError::NotFoundOrAlreadyProcessed)?;

        tracing::info!(member_id = %member.id, decision = %decision, "Team lead request resolved");

        let notification = Notification::team_lead_decision(&member, decision);
        if let Err(e) = self.notifier.send(&notification).await {
            tracing::warn!(member_id = %member.id, error = %e, "Decision notification not delivered");
        }

        Ok(member)
    }
}
