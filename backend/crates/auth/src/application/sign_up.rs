//! Sign Up Use Case
//!
//! Creates a new member account. Team leads are created pending: admins are
//! notified and the caller gets `PendingVerification` instead of a session.

use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::config::AuthConfig;
use crate::domain::entity::{
    session::Session,
    user::{NewUser, User},
};
use crate::domain::notifier::{Notification, Notifier};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    person_name::PersonName,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user: User,
    pub session: Session,
}

/// Sign up use case
pub struct SignUpUseCase<U, S, N>
where
    U: UserRepository,
    S: SessionRepository,
    N: Notifier,
{
    user_repo: Arc<U>,
    auth_service: AuthService<S>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<U, S, N> SignUpUseCase<U, S, N>
where
    U: UserRepository,
    S: SessionRepository,
    N: Notifier,
{
    pub fn new(
        user_repo: Arc<U>,
        session_repo: Arc<S>,
        notifier: Arc<N>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            auth_service: AuthService::new(session_repo, config.clone()),
            notifier,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let name = PersonName::new(input.name)?;
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;
        let role = UserRole::from_code(input.role.trim())
            .ok_or_else(|| AuthError::Validation("Invalid role".to_string()))?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::AlreadyExists);
        }

        let password = UserPassword::from_raw(&raw_password, self.config.password_scheme)?;
        let user = self
            .user_repo
            .create(&NewUser::register(name, email, password, role))
            .await?;

        if user.is_pending() {
            self.notify_admins(&user).await?;
            tracing::info!(user_id = %user.id, role = %user.role, "Signup awaiting admin approval");
            return Err(AuthError::PendingVerification);
        }

        let session = self.auth_service.create_session(user.id).await?;

        tracing::info!(user_id = %user.id, role = %user.role, "User signed up");

        Ok(SignUpOutput { user, session })
    }

    async fn notify_admins(&self, team_lead: &User) -> AuthResult<()> {
        let admins = self.user_repo.find_by_role(UserRole::Admin).await?;
        if admins.is_empty() {
            return Err(AuthError::NoAdminAvailable);
        }

        self.notifier
            .send(&Notification::team_lead_signup(&admins, team_lead))
            .await
    }
}
