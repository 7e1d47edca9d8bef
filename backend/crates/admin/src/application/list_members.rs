//! List Members Use Case

use std::sync::Arc;

use auth::domain::entity::user::User;

use crate::domain::repository::MemberRepository;
use crate::error::AdminResult;

pub struct ListMembersUseCase<M>
where
    M: MemberRepository,
{
    member_repo: Arc<M>,
}

impl<M> ListMembersUseCase<M>
where
    M: MemberRepository,
{
    pub fn new(member_repo: Arc<M>) -> Self {
        Self { member_repo }
    }

    /// Active, non-deleted members
    pub async fn execute(&self) -> AdminResult<Vec<User>> {
        self.member_repo.list_active().await
    }
}
