//! Activation Status Value Objects
//!
//! `ActivationStatus` is the stored state of an account. `ActivationDecision`
//! is the subset an admin may choose when resolving a pending team-lead
//! request.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl ActivationStatus {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use ActivationStatus::*;
        match self {
            Pending => "pending",
            Approved => "approved",
            Rejected => "rejected",
            Suspended => "suspended",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use ActivationStatus::*;
        match code {
            "pending" => Some(Pending),
            "approved" => Some(Approved),
            "rejected" => Some(Rejected),
            "suspended" => Some(Suspended),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, ActivationStatus::Pending)
    }
}

impl fmt::Display for ActivationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of a pending team-lead request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationDecision {
    Approved,
    Rejected,
}

impl ActivationDecision {
    /// Status written to the row
    #[inline]
    pub const fn status(&self) -> ActivationStatus {
        match self {
            ActivationDecision::Approved => ActivationStatus::Approved,
            ActivationDecision::Rejected => ActivationStatus::Rejected,
        }
    }

    /// `is_active` written to the row
    #[inline]
    pub const fn is_active(&self) -> bool {
        match self {
            ActivationDecision::Approved => true,
            ActivationDecision::Rejected => false,
        }
    }
}

impl fmt::Display for ActivationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status().code())
    }
}
