//! Password Hashing and Verification
//!
//! Credential hashing for stored user passwords plus the signup password
//! policy.
//!
//! ## Schemes
//! - [`PasswordScheme::Sha256Hex`]: unsalted SHA-256 over the password bytes
//!   as typed, lower-case hex. This is the format existing rows were written
//!   in; it is deterministic, so a digest can be compared directly.
//! - [`PasswordScheme::Argon2id`]: salted, memory-hard PHC string over the
//!   NFKC form of the password.
//!
//! Verification dispatches on the stored digest, so rows written under
//! either scheme keep verifying whichever scheme new hashes use.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::{constant_time_eq, sha256_hex};

// ============================================================================
// Constants
// ============================================================================

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const MAX_PASSWORD_LENGTH: usize = 128;

/// At least one of these must appear in a new password
pub const SPECIAL_CHARACTERS: &str = "@$!%*?&";

/// Prefix of every Argon2 PHC string
const ARGON2_PREFIX: &str = "$argon2";

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty")]
    Empty,

    /// Outside ASCII letters, digits and the special characters
    #[error("Password contains invalid characters")]
    InvalidCharacter,

    /// Missing one of lower-case, upper-case, digit, special character
    #[error(
        "Password must contain at least one uppercase letter, one lowercase letter, one number and one special character"
    )]
    MissingCharacterClass,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Scheme
// ============================================================================

/// Algorithm used for newly written hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    #[default]
    Sha256Hex,
    Argon2id,
}

impl PasswordScheme {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Sha256Hex => "sha256",
            Self::Argon2id => "argon2id",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "sha256" => Some(Self::Sha256Hex),
            "argon2id" | "argon2" => Some(Self::Argon2id),
            _ => None,
        }
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Not `Clone`, and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Password chosen at signup, checked against the full policy
    ///
    /// - 8 to 128 characters
    /// - only ASCII letters, digits and [`SPECIAL_CHARACTERS`]
    /// - at least one lower-case, upper-case, digit, and special character
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::for_verification(raw)?;
        let text = password.0.as_str();

        let char_count = text.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if !text.chars().all(is_allowed_character) {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        let has_lower = text.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = text.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = text.chars().any(|c| c.is_ascii_digit());
        let has_special = text.chars().any(|c| SPECIAL_CHARACTERS.contains(c));
        if !(has_lower && has_upper && has_digit && has_special) {
            return Err(PasswordPolicyError::MissingCharacterClass);
        }

        Ok(password)
    }

    /// Password typed at login; only the empty string is rejected
    ///
    /// Kept byte-for-byte as typed. The policy is not applied here so a
    /// login response never reveals anything about the stored password's
    /// shape.
    pub fn for_verification(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// NFKC form fed to Argon2
    fn normalized(&self) -> Zeroizing<String> {
        Zeroizing::new(self.0.nfkc().collect())
    }

    /// Hash the password with the given scheme
    ///
    /// `Sha256Hex` digests the bytes exactly as typed; `Argon2id` digests
    /// the NFKC form.
    pub fn hash(&self, scheme: PasswordScheme) -> Result<HashedPassword, PasswordHashError> {
        let hash = match scheme {
            PasswordScheme::Sha256Hex => sha256_hex(self.as_bytes()),
            PasswordScheme::Argon2id => {
                let salt = SaltString::generate(OsRng);
                Argon2::default()
                    .hash_password(self.normalized().as_bytes(), &salt)
                    .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
                    .to_string()
            }
        };

        Ok(HashedPassword { hash })
    }
}

fn is_allowed_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || SPECIAL_CHARACTERS.contains(c)
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Stored password digest (hex SHA-256 or Argon2 PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a digest read from the database
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Scheme this digest was written with
    pub fn scheme(&self) -> PasswordScheme {
        if self.hash.starts_with(ARGON2_PREFIX) {
            PasswordScheme::Argon2id
        } else {
            PasswordScheme::Sha256Hex
        }
    }

    /// Verify a password against this digest
    ///
    /// `Ok(false)` on mismatch; `Err` only when the digest itself is
    /// unusable or the primitive fails.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        match self.scheme() {
            PasswordScheme::Sha256Hex => {
                let computed = sha256_hex(password.as_bytes());
                Ok(constant_time_eq(computed.as_bytes(), self.hash.as_bytes()))
            }
            PasswordScheme::Argon2id => {
                let parsed =
                    PasswordHash::new(&self.hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

                match Argon2::default().verify_password(password.normalized().as_bytes(), &parsed) {
                    Ok(()) => Ok(true),
                    Err(argon2::password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHashError::HashingFailed(e.to_string())),
                }
            }
        }
    }

    /// True when the digest was written with a different scheme than `current`
    pub fn needs_rehash(&self, current: PasswordScheme) -> bool {
        self.scheme() != current
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("scheme", &self.scheme())
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
