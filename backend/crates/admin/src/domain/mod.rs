//! Domain Layer
//!
//! Members are `auth` users; this context only adds the admin-side
//! persistence operations on them.

pub mod repository;

pub use repository::MemberRepository;
