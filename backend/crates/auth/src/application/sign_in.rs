//! Sign In Use Case
//!
//! Authenticates by email + password and issues a session.

use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::config::AuthConfig;
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub user: User,
    pub session: Session,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    auth_service: AuthService<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            auth_service: AuthService::new(session_repo, config.clone()),
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A malformed email cannot belong to anyone
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Checked before the password so pending accounts cannot probe it
        if user.is_pending() {
            return Err(AuthError::PendingVerification);
        }

        let raw_password =
            RawPassword::for_login(input.password).map_err(|_| AuthError::InvalidCredentials)?;
        if !user.password.verify(&raw_password)? {
            return Err(AuthError::InvalidCredentials);
        }

        if user.password.needs_rehash(self.config.password_scheme) {
            tracing::debug!(user_id = %user.id, "Password digest uses a different scheme than configured");
        }

        let session = self.auth_service.create_session(user.id).await?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(SignInOutput { user, session })
    }
}
