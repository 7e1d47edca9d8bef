//! Auth Middleware
//!
//! Session and admin gates for protected routes. Both resolve the session
//! cookie and put a [`CurrentUser`] into the request extensions.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{session_token::SessionToken, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }
}

/// The authenticated caller, stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: UserId,
}

async fn authenticate<R>(state: &AuthMiddlewareState<R>, token: Option<String>) -> AuthResult<Session>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = token
        .filter(|t| !t.is_empty())
        .map(SessionToken::from_raw)
        .ok_or(AuthError::Unauthenticated)?;

    AuthService::new(state.repo.clone(), state.config.clone())
        .validate_session(&token)
        .await?
        .ok_or(AuthError::SessionInvalid)
}

async fn authenticate_admin<R>(
    state: &AuthMiddlewareState<R>,
    token: Option<String>,
) -> AuthResult<CurrentUser>
where
    R: SessionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let session = authenticate(state, token).await?;
    let user = state
        .repo
        .find_by_id(session.user_id)
        .await?
        .ok_or(AuthError::SessionInvalid)?;

    if !user.is_admin() {
        tracing::warn!(user_id = %user.id, role = %user.role, "Non-admin attempted admin action");
        return Err(AuthError::Forbidden);
    }

    Ok(CurrentUser { user_id: user.id })
}

/// Middleware that requires a valid session
///
/// - no cookie: `401 Authentication required`
/// - unknown or expired token: `401 Invalid or expired session`
pub async fn require_auth_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    match authenticate(&state, token).await {
        Ok(session) => {
            req.extensions_mut().insert(CurrentUser {
                user_id: session.user_id,
            });
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

/// Middleware that requires a valid session belonging to an admin
///
/// Non-admin callers get `403 Admin access required`.
pub async fn require_admin<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: SessionRepository + UserRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    match authenticate_admin(&state, token).await {
        Ok(current) => {
            req.extensions_mut().insert(current);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}
