//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentUserUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::notifier::Notifier;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, MemberResponse, MessageResponse, SignUpRequest, UserResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, N>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /users/signup
pub async fn sign_up<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<SignUpRequest>,
) -> Result<impl IntoResponse, AppError>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        password: req.password,
        role: req.role,
    };

    let output = use_case
        .execute(input)
        .await
        .map_err(AuthError::into_signup_error)?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(output.session.session_token.as_str());

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse::from(&output.user)),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /users/login
pub async fn sign_in<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case
        .execute(input)
        .await
        .map_err(AuthError::into_login_error)?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(output.session.session_token.as_str());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(UserResponse::from(&output.user)),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /users/logout
///
/// Always `200`; the cookie is cleared whether or not a session existed.
pub async fn sign_out<R, N>(
    State(state): State<AuthAppState<R, N>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        // The client is logged out either way
        if let Err(e) = use_case.execute(&SessionToken::from_raw(token)).await {
            e.log();
        }
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

// ============================================================================
// Current User
// ============================================================================

/// GET /users/me (behind `require_auth_session`)
pub async fn current_user<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Extension(current): Extension<CurrentUser>,
) -> AuthResult<Json<MemberResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let user = CurrentUserUseCase::new(state.repo.clone())
        .execute(current.user_id)
        .await?;

    Ok(Json(MemberResponse::from(&user)))
}
