//! API DTOs (Data Transfer Objects)
//!
//! Member bodies reuse `auth`'s `MemberResponse`.

use auth::domain::value_object::activation_status::ActivationDecision;
use serde::{Deserialize, Serialize};

/// POST /admin/team-lead-requests/handle
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleTeamLeadRequest {
    pub member_id: i64,
    /// `approved` or `rejected`
    pub status: ActivationDecision,
}

/// PUT /admin/members
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRoleRequest {
    pub member_id: i64,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationResponse {
    pub success: bool,
    pub message: String,
}

impl OperationResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
