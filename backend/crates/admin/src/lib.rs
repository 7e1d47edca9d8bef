//! Admin (Member Administration) Backend Module
//!
//! Admin-only operations on member accounts: resolving pending team-lead
//! signups and managing active members. Sessions, roles and the admin gate
//! come from the `auth` crate.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;

pub use error::{AdminError, AdminResult};
pub use infra::postgres::PgMemberRepository;
pub use presentation::router::admin_router;
