//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod log_notifier;
pub mod mailjet;
pub mod postgres;

pub use log_notifier::LogNotifier;
pub use mailjet::{MailjetConfig, MailjetNotifier};
pub use postgres::PgAuthRepository;
