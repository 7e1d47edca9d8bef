//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password (never says which)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A live user already uses this email
    #[error("User already exists")]
    AlreadyExists,

    /// Team lead account waiting for admin approval
    #[error("Your account is pending verification by an admin")]
    PendingVerification,

    /// A pending signup found nobody to approve it
    #[error("No admin available to approve the request")]
    NoAdminAvailable,

    /// No session cookie on a protected route
    #[error("Authentication required")]
    Unauthenticated,

    /// Unknown, deleted or expired session
    #[error("Invalid or expired session")]
    SessionInvalid,

    /// Authenticated but lacking the admin role
    #[error("Admin access required")]
    Forbidden,

    /// Request field rejected
    #[error("{0}")]
    Validation(String),

    /// Notification delivery failed
    #[error("Notification failed: {0}")]
    Notification(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::Unauthenticated
            | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::AlreadyExists => ErrorKind::Conflict,
            AuthError::PendingVerification | AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Notification(_) => ErrorKind::BadGateway,
            AuthError::NoAdminAvailable | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Infrastructure faults keep their detail in the log, not in the body.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Rendering for `POST /users/signup`
    ///
    /// Business and validation failures are all `400`; faults stay `5xx`.
    pub fn into_signup_error(self) -> AppError {
        self.log();
        match self {
            AuthError::AlreadyExists
            | AuthError::PendingVerification
            | AuthError::Validation(_) => AppError::bad_request(self.to_string()),
            other => other.to_app_error(),
        }
    }

    /// Rendering for `POST /users/login`: every failure is a flat `401`
    pub fn into_login_error(self) -> AppError {
        self.log();
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::unauthorized(self.to_app_error().message().to_string())
            }
            other => AppError::unauthorized(other.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::NoAdminAvailable => {
                tracing::error!("Team lead signup with no admin to approve it");
            }
            AuthError::Notification(msg) => {
                tracing::error!(message = %msg, "Notification delivery failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Value objects validate into `AppError`; client errors become `Validation`
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_server_error() {
            AuthError::Internal(err.to_string())
        } else {
            AuthError::Validation(err.message().to_string())
        }
    }
}
