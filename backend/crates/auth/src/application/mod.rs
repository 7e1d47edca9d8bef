//! Application Layer
//!
//! Use cases and application services.

pub mod auth_service;
pub mod config;
pub mod current_user;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use auth_service::AuthService;
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
