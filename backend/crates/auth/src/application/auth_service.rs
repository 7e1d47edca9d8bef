//! Auth Service
//!
//! Owns the session lifecycle: issuing, validating (with lazy expiry) and
//! invalidating session tokens.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::{session_token::SessionToken, user_id::UserId};
use crate::error::AuthResult;

pub struct AuthService<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> AuthService<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Issue and persist a new session for the user
    pub async fn create_session(&self, user_id: UserId) -> AuthResult<Session> {
        let session = Session::issue(user_id, self.config.session_ttl_chrono(), Utc::now());
        self.session_repo.insert(&session).await?;

        tracing::debug!(user_id = %user_id, expires_at = %session.expires_at, "Session created");
        Ok(session)
    }

    pub async fn validate_session(&self, token: &SessionToken) -> AuthResult<Option<Session>> {
        self.validate_session_at(token, Utc::now()).await
    }

    /// Resolve a token as of `now`
    ///
    /// An expired session is soft-deleted on the spot and reported as absent.
    pub async fn validate_session_at(
        &self,
        token: &SessionToken,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<Session>> {
        let Some(session) = self.session_repo.find_by_token(token).await? else {
            return Ok(None);
        };

        if session.is_expired_at(now) {
            self.session_repo.delete(token).await?;
            tracing::debug!(user_id = %session.user_id, "Expired session removed");
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Soft-delete the session; idempotent
    pub async fn invalidate_session(&self, token: &SessionToken) -> AuthResult<bool> {
        self.session_repo.delete(token).await?;
        Ok(true)
    }

    /// Bulk removal of sessions nobody came back for
    pub async fn purge_expired(&self) -> AuthResult<u64> {
        let purged = self.session_repo.purge_expired(Utc::now()).await?;
        tracing::info!(sessions_purged = purged, "Purged expired sessions");
        Ok(purged)
    }
}
