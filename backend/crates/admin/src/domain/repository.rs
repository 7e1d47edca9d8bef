//! Repository Traits

use auth::domain::entity::user::User;
use auth::domain::value_object::{
    activation_status::ActivationDecision, user_id::UserId, user_role::UserRole,
};

use crate::error::AdminResult;

/// Member administration over the `users` table
///
/// Soft-deleted members are invisible to every operation.
#[trait_variant::make(MemberRepository: Send)]
pub trait LocalMemberRepository {
    /// Active members
    async fn list_active(&self) -> AdminResult<Vec<User>>;

    /// Pending team-lead signups, newest first
    async fn list_pending_team_leads(&self) -> AdminResult<Vec<User>>;

    /// Apply `decision` only if the member is still a pending team lead
    ///
    /// Check and write happen in one statement; `None` when the guard
    /// did not match.
    async fn resolve_team_lead_request(
        &self,
        member_id: UserId,
        decision: ActivationDecision,
    ) -> AdminResult<Option<User>>;

    /// `false` when no such member
    async fn update_role(&self, member_id: UserId, role: UserRole) -> AdminResult<bool>;

    /// Tombstone the member and end their sessions; `false` when no such member
    async fn soft_delete(&self, member_id: UserId) -> AdminResult<bool>;
}
