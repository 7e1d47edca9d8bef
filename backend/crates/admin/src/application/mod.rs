//! Application Layer

pub mod delete_member;
pub mod handle_team_lead_request;
pub mod list_members;
pub mod list_pending_requests;
pub mod update_member_role;

pub use delete_member::DeleteMemberUseCase;
pub use handle_team_lead_request::HandleTeamLeadRequestUseCase;
pub use list_members::ListMembersUseCase;
pub use list_pending_requests::ListPendingRequestsUseCase;
pub use update_member_role::UpdateMemberRoleUseCase;
