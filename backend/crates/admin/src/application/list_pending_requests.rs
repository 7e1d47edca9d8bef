//! List Pending Team Lead Requests Use Case

use std::sync::Arc;

use auth::domain::entity::user::User;

use crate::domain::repository::MemberRepository;
use crate::error::AdminResult;

pub struct ListPendingRequestsUseCase<M>
where
    M: MemberRepository,
{
    member_repo: Arc<M>,
}

impl<M> ListPendingRequestsUseCase<M>
where
    M: MemberRepository,
{
    pub fn new(member_repo: Arc<M>) -> Self {
        Self { member_repo }
    }

    pub async fn execute(&self) -> AdminResult<Vec<User>> {
        self.member_repo.list_pending_team_leads().await
    }
}
