//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod notifier;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    session::Session,
    user::{NewUser, User},
};
pub use notifier::{Notification, Notifier};
pub use repository::{SessionRepository, UserRepository};
