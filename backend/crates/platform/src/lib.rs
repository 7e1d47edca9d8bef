//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Cryptographic utilities (OS randomness, SHA-256, constant-time compare)
//! - Password hashing and signup password policy
//! - Session cookie building and parsing

pub mod cookie;
pub mod crypto;
pub mod password;
