//! Admin Router
//!
//! Mounted under `/admin` by the API binary. Every route sits behind the
//! admin gate from `auth`.

use auth::domain::notifier::Notifier;
use auth::domain::repository::{SessionRepository, UserRepository};
use auth::middleware::{AuthMiddlewareState, require_admin};
use auth::{AuthConfig, PgAuthRepository};
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::domain::repository::MemberRepository;
use crate::infra::postgres::PgMemberRepository;
use crate::presentation::handlers::{self, AdminAppState};

/// Create the Admin router with PostgreSQL repositories
pub fn admin_router<N>(
    members: PgMemberRepository,
    sessions: PgAuthRepository,
    notifier: N,
    config: AuthConfig,
) -> Router
where
    N: Notifier + Clone + Send + Sync + 'static,
{
    admin_router_generic(members, sessions, notifier, config)
}

/// Create a generic Admin router
///
/// `R` resolves the caller's session and role for the gate.
pub fn admin_router_generic<M, R, N>(members: M, sessions: R, notifier: N, config: AuthConfig) -> Router
where
    M: MemberRepository + Clone + Send + Sync + 'static,
    R: SessionRepository + UserRepository + Clone + Send + Sync + 'static,
    N: Notifier + Clone + Send + Sync + 'static,
{
    let admin_gate = middleware::from_fn_with_state(
        AuthMiddlewareState::new(Arc::new(sessions), Arc::new(config)),
        require_admin::<R>,
    );

    let state = AdminAppState {
        members: Arc::new(members),
        notifier: Arc::new(notifier),
    };

    Router::new()
        .route(
            "/team-lead-requests/handle",
            post(handlers::handle_team_lead_request::<M, N>),
        )
        .route(
            "/team-lead-requests/pending",
            get(handlers::list_pending_requests::<M, N>),
        )
        .route(
            "/members",
            get(handlers::list_members::<M, N>).put(handlers::update_member_role::<M, N>),
        )
        .route("/members/{member_id}", delete(handlers::delete_member::<M, N>))
        .route_layer(admin_gate)
        .with_state(state)
}
