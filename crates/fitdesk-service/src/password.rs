//! Password hashing and verification.
//!
//! Passwords are stored as salted argon2 PHC strings and verified by
//! recomputation; the raw password never reaches the storage layer and is
//! never compared by equality.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{Result, ServiceError};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Hash a raw password with a fresh random salt.
///
/// # Errors
///
/// Returns [`ServiceError::PasswordHash`] if the hasher rejects the input.
pub fn hash_password(raw: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::PasswordHash(e.to_string()))
}

/// Verify a raw password against a stored PHC string.
///
/// A stored value that is not a valid PHC string counts as a mismatch; the
/// argon2 verifier itself compares in constant time.
#[must_use]
pub fn verify_password(raw: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        tracing::warn!("stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(raw.as_bytes(), &parsed)
        .is_ok()
}

/// Trim a raw password and enforce [`MIN_PASSWORD_LEN`].
pub(crate) fn require_min_len(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_PASSWORD_LEN {
        return Err(ServiceError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(trimmed)
}
