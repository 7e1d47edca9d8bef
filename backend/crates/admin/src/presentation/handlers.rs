//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use auth::domain::notifier::Notifier;
use auth::domain::value_object::user_id::UserId;
use auth::models::MemberResponse;
use std::sync::Arc;

use crate::application::{
    DeleteMemberUseCase, HandleTeamLeadRequestUseCase, ListMembersUseCase,
    ListPendingRequestsUseCase, UpdateMemberRoleUseCase,
};
use crate::domain::repository::MemberRepository;
use crate::error::AdminResult;
use crate::presentation::dto::{HandleTeamLeadRequest, OperationResponse, UpdateMemberRoleRequest};

/// Shared state for admin handlers
#[derive(Clone)]
pub struct AdminAppState<M, N>
where
    M: MemberRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    pub members: Arc<M>,
    pub notifier: Arc<N>,
}

// ============================================================================
// Team Lead Requests
// ============================================================================

/// POST /admin/team-lead-requests/handle
pub async fn handle_team_lead_request<M, N>(
    State(state): State<AdminAppState<M, N>>,
    Json(req): Json<HandleTeamLeadRequest>,
) -> AdminResult<Json<MemberResponse>>
where
    M: MemberRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let member = HandleTeamLeadRequestUseCase::new(state.members.clone(), state.notifier.clone())
        .execute(UserId::from_raw(req.member_id), req.status)
        .await?;

    Ok(Json(MemberResponse::from(&member)))
}

/// GET /admin/team-lead-requests/pending
pub async fn list_pending_requests<M, N>(
    State(state): State<AdminAppState<M, N>>,
) -> AdminResult<Json<Vec<MemberResponse>>>
where
    M: MemberRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let pending = ListPendingRequestsUseCase::new(state.members.clone())
        .execute()
        .await?;

    Ok(Json(pending.iter().map(MemberResponse::from).collect()))
}

// ============================================================================
// Members
// ============================================================================

/// GET /admin/members
pub async fn list_members<M, N>(
    State(state): State<AdminAppState<M, N>>,
) -> AdminResult<Json<Vec<MemberResponse>>>
where
    M: MemberRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let members = ListMembersUseCase::new(state.members.clone())
        .execute()
        .await?;

    Ok(Json(members.iter().map(MemberResponse::from).collect()))
}

/// PUT /admin/members
pub async fn update_member_role<M, N>(
    State(state): State<AdminAppState<M, N>>,
    Json(req): Json<UpdateMemberRoleRequest>,
) -> AdminResult<Json<OperationResponse>>
where
    M: MemberRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    UpdateMemberRoleUseCase::new(state.members.clone())
        .execute(UserId::from_raw(req.member_id), &req.role)
        .await?;

    Ok(Json(OperationResponse::ok("Member role updated successfully")))
}

/// DELETE /admin/members/{member_id}
pub async fn delete_member<M, N>(
    State(state): State<AdminAppState<M, N>>,
    Path(member_id): Path<i64>,
) -> AdminResult<Json<OperationResponse>>
where
    M: MemberRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    DeleteMemberUseCase::new(state.members.clone())
        .execute(UserId::from_raw(member_id))
        .await?;

    Ok(Json(OperationResponse::ok("Member deleted successfully")))
}
