//! Password hashing with Argon2id.
//!
//! Hashing is deliberately CPU-expensive; callers on the async request path
//! must run these functions under `tokio::task::spawn_blocking`.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Password hashing errors.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Password hash error: {0}")]
    HashError(String),

    #[error("Password verify error: {0}")]
    VerifyError(String),
}

/// Hashes a password with Argon2id and a fresh random salt.
///
/// Returns the hash in PHC string format, suitable for storage.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored PHC hash string.
///
/// The underlying comparison is constant-time; a mismatched password and a
/// matched one take the same time to reject or accept.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| PasswordError::VerifyError(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
