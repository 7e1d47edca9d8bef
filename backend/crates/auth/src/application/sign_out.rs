//! Sign Out Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    auth_service: AuthService<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            auth_service: AuthService::new(session_repo, config),
        }
    }

    /// Sign out from the session behind `session_token`
    ///
    /// Succeeds for unknown or already invalidated tokens.
    pub async fn execute(&self, session_token: &SessionToken) -> AuthResult<()> {
        self.auth_service.invalidate_session(session_token).await?;

        tracing::info!("User signed out");
        Ok(())
    }
}
