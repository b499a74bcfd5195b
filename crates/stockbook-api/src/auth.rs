//! # Password Hashing
//!
//! Credential handling for the login check.
//!
//! The reference system compared plaintext passwords with string equality.
//! That gap is closed here: passwords are stored as salted argon2 PHC
//! strings and compared through the verifier, which is constant-time with
//! respect to the password bytes.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use tracing::warn;

use crate::error::ApiError;

/// Hashes a password into an argon2 PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            warn!(error = %e, "password hashing failed");
            ApiError::internal()
        })
}

/// Verifies a password against a stored PHC string.
///
/// Returns `false` for both a wrong password and an unparseable hash; the
/// caller treats either as failed credentials.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            warn!(error = %e, "stored password hash is unparseable");
            false
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
