//! User Entity
//!
//! A member account: identity, credentials and authorization state.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    activation_status::ActivationStatus, email::Email, person_name::PersonName,
    user_id::UserId, user_password::UserPassword, user_role::UserRole,
};

/// Persisted user row
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: PersonName,
    /// Unique among non-deleted users
    pub email: Email,
    pub password: UserPassword,
    pub role: UserRole,
    pub is_active: bool,
    pub activation_status: ActivationStatus,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete tombstone
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Pending accounts may not log in
    pub fn is_pending(&self) -> bool {
        self.activation_status.is_pending()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A user about to be inserted; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: PersonName,
    pub email: Email,
    pub password: UserPassword,
    pub role: UserRole,
    pub is_active: bool,
    pub activation_status: ActivationStatus,
    pub image_url: Option<String>,
}

impl NewUser {
    /// Registration with the role-dependent initial activation state
    pub fn register(
        name: PersonName,
        email: Email,
        password: UserPassword,
        role: UserRole,
    ) -> Self {
        let (is_active, activation_status) = role.initial_activation();

        Self {
            name,
            email,
            password,
            role,
            is_active,
            activation_status,
            image_url: None,
        }
    }
}
