//! Auth Router
//!
//! Mounted under `/users` by the API binary.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::notifier::Notifier;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth_session};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router<N>(repo: PgAuthRepository, notifier: N, config: AuthConfig) -> Router
where
    N: Notifier + Clone + Send + Sync + 'static,
{
    auth_router_generic(repo, notifier, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R, N>(repo: R, notifier: N, config: AuthConfig) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let repo = Arc::new(repo);
    let config = Arc::new(config);

    let session_gate = middleware::from_fn_with_state(
        AuthMiddlewareState::new(repo.clone(), config.clone()),
        require_auth_session::<R>,
    );

    let state = AuthAppState {
        repo,
        notifier: Arc::new(notifier),
        config,
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R, N>))
        .route("/login", post(handlers::sign_in::<R, N>))
        .route("/logout", post(handlers::sign_out::<R, N>))
        .route(
            "/me",
            get(handlers::current_user::<R, N>).route_layer(session_gate),
        )
        .with_state(state)
}
