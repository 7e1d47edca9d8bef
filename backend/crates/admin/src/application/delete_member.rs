//! Delete Member Use Case
//!
//! Soft delete: the row stays, with `deleted_at` set.

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::repository::MemberRepository;
use crate::error::{AdminError, AdminResult};

pub struct DeleteMemberUseCase<M>
where
    M: MemberRepository,
{
    member_repo: Arc<M>,
}

impl<M> DeleteMemberUseCase<M>
where
    M: MemberRepository,
{
    pub fn new(member_repo: Arc<M>) -> Self {
        Self { member_repo }
    }

    pub async fn execute(&self, member_id: UserId) -> AdminResult<()> {
        if !self.member_repo.soft_delete(member_id).await? {
            return Err(AdminError::MemberNotFound);
        }

        tracing::info!(member_id = %member_id, "Member deleted");
        Ok(())
    }
}
