//! User Password Value Object
//!
//! Domain wrapper over `platform::password`: policy and hashing failures are
//! turned into user-facing `AppError`s here.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordPolicyError, PasswordScheme, SPECIAL_CHARACTERS,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input, zeroized on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Password chosen at signup; the full policy applies
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(policy_error)?;
        Ok(Self(clear_text))
    }

    /// Password typed at login; only emptiness is rejected
    pub fn for_login(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::for_verification(raw).map_err(policy_error)?;
        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

fn policy_error(err: PasswordPolicyError) -> AppError {
    match err {
        PasswordPolicyError::TooShort { min, .. } => {
            AppError::bad_request(format!("Password must be at least {} characters", min))
        }
        PasswordPolicyError::TooLong { max, .. } => {
            AppError::bad_request(format!("Password must be at most {} characters", max))
        }
        PasswordPolicyError::Empty => AppError::bad_request("Password is required"),
        PasswordPolicyError::InvalidCharacter => AppError::bad_request(format!(
            "Password may only contain letters, numbers and {}",
            SPECIAL_CHARACTERS
        )),
        PasswordPolicyError::MissingCharacterClass => AppError::bad_request(format!(
            "Password must contain at least one uppercase letter, one lowercase letter, one number and one special character ({})",
            SPECIAL_CHARACTERS
        )),
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Stored password digest
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password with the configured scheme
    pub fn from_raw(raw: &RawPassword, scheme: PasswordScheme) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash(scheme)
            .map_err(|e| AppError::internal(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Digest read from the `password_hash` column
    pub fn from_db(hash: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(hash))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Compare a login attempt against this digest
    ///
    /// A digest that cannot be parsed is an internal fault, not a mismatch.
    pub fn verify(&self, raw: &RawPassword) -> AppResult<bool> {
        self.0.verify(raw.inner()).map_err(|e| {
            AppError::internal("Stored password digest is unusable").with_source(e)
        })
    }

    pub fn needs_rehash(&self, current: PasswordScheme) -> bool {
        self.0.needs_rehash(current)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("scheme", &self.0.scheme())
            .field("hash", &"[HASH]")
            .finish()
    }
}
