use serde::{Deserialize, Serialize};
use std::fmt;

use super::activation_status::ActivationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Admin,
    TeamMember,
    TeamLead,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Admin => "admin",
            TeamMember => "team-member",
            TeamLead => "team-lead",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "admin" => Some(Admin),
            "team-member" => Some(TeamMember),
            "team-lead" => Some(TeamLead),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Roles an admin may assign to an existing member
    #[inline]
    pub const fn is_assignable(&self) -> bool {
        use UserRole::*;
        match self {
            TeamMember | TeamLead => true,
            Admin => false,
        }
    }

    /// `(is_active, activation_status)` a freshly registered account starts with
    ///
    /// Team leads wait for an admin decision; everyone else is live at once.
    pub const fn initial_activation(&self) -> (bool, ActivationStatus) {
        use UserRole::*;
        match self {
            TeamLead => (false, ActivationStatus::Pending),
            Admin | TeamMember => (true, ActivationStatus::Approved),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
