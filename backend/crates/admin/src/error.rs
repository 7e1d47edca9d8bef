//! Admin Error Types

use axum::response::{IntoResponse, Response};
use auth::AuthError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type AdminResult<T> = Result<T, AdminError>;

#[derive(Debug, Error)]
pub enum AdminError {
    /// The guarded approval matched no pending team-lead row
    #[error("Team lead not found or already processed")]
    NotFoundOrAlreadyProcessed,

    #[error("Member not found")]
    MemberNotFound,

    /// Only team-member and team-lead may be assigned
    #[error("Invalid role")]
    InvalidRole,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdminError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::NotFoundOrAlreadyProcessed => ErrorKind::Conflict,
            AdminError::MemberNotFound => ErrorKind::NotFound,
            AdminError::InvalidRole => ErrorKind::BadRequest,
            AdminError::Auth(e) => e.kind(),
            AdminError::Database(_) | AdminError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            AdminError::Auth(e) => e.to_app_error(),
            AdminError::Database(_) | AdminError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            AdminError::Database(e) => {
                tracing::error!(error = %e, "Admin database error");
            }
            AdminError::Internal(msg) => {
                tracing::error!(message = %msg, "Admin internal error");
            }
            AdminError::Auth(e) if e.kind().is_server_error() => {
                tracing::error!(error = %e, "Admin error from auth context");
            }
            _ => {
                tracing::debug!(error = %self, "Admin error");
            }
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
