//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Every read ignores soft-deleted rows.

use chrono::{DateTime, Utc};

use crate::domain::entity::{
    session::Session,
    user::{NewUser, User},
};
use crate::domain::value_object::{
    email::Email, session_token::SessionToken, user_id::UserId, user_role::UserRole,
};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user; a live row with the same email yields `AlreadyExists`
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// All live users with the given role
    async fn find_by_role(&self, role: UserRole) -> AuthResult<Vec<User>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    async fn insert(&self, session: &Session) -> AuthResult<()>;

    /// Live (not soft-deleted) session for the token, expired or not
    async fn find_by_token(&self, token: &SessionToken) -> AuthResult<Option<Session>>;

    /// Soft-delete; deleting an absent token is not an error
    async fn delete(&self, token: &SessionToken) -> AuthResult<()>;

    /// Soft-delete every live session with `expires_at <= now`
    async fn purge_expired(&self, now: DateTime<Utc>) -> AuthResult<u64>;
}
