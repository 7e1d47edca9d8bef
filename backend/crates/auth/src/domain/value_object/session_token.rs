//! Session Token Value Object
//!
//! Opaque bearer credential carried in the session cookie.

use std::fmt;

use platform::crypto::random_token_hex;

/// Random bytes behind each token (hex-encoded to 64 characters)
pub const SESSION_TOKEN_BYTES: usize = 32;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Fresh token from the OS RNG
    pub fn generate() -> Self {
        Self(random_token_hex(SESSION_TOKEN_BYTES))
    }

    /// Wrap a token read from a cookie or the database
    pub fn from_raw(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}
