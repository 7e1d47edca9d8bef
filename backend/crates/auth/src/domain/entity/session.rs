//! Session Entity
//!
//! A bearer credential bound to one user, referenced by the session cookie.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::{session_token::SessionToken, user_id::UserId};

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: UserId,
    pub session_token: SessionToken,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Session {
    /// New session with a fresh random token
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn issue(user_id: UserId, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            session_token: SessionToken::generate(),
            expires_at: now + ttl,
            created_at: now,
            deleted_at: None,
        }
    }

    /// Expired once `now` reaches `expires_at` (the boundary itself is expired)
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Seconds left before expiry, never negative
    pub fn remaining_secs_at(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}
