//! Update Member Role Use Case

use std::sync::Arc;

use auth::domain::value_object::{user_id::UserId, user_role::UserRole};

use crate::domain::repository::MemberRepository;
use crate::error::{AdminError, AdminResult};

pub struct UpdateMemberRoleUseCase<M>
where
    M: MemberRepository,
{
    member_repo: Arc<M>,
}

impl<M> UpdateMemberRoleUseCase<M>
where
    M: MemberRepository,
{
    pub fn new(member_repo: Arc<M>) -> Self {
        Self { member_repo }
    }

    /// `role` must be `team-member` or `team-lead`; activation is untouched
    pub async fn execute(&self, member_id: UserId, role: &str) -> AdminResult<()> {
        let role = UserRole::from_code(role.trim())
            .filter(UserRole::is_assignable)
            .ok_or(AdminError::InvalidRole)?;

        if !self.member_repo.update_role(member_id, role).await? {
            return Err(AdminError::MemberNotFound);
        }

        tracing::info!(member_id = %member_id, role = %role, "Member role updated");
        Ok(())
    }
}
