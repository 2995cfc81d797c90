//! Password hashing (bcrypt).

use bcrypt::{hash, verify};
use thiserror::Error;

pub use bcrypt::DEFAULT_COST;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(bcrypt::BcryptError),

    #[error("failed to verify password: {0}")]
    Verify(bcrypt::BcryptError),
}

/// Hash a password with bcrypt at the given cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    hash(password, cost).map_err(PasswordError::Hash)
}

/// Verify a password against a stored bcrypt hash.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, PasswordError> {
    verify(password, hashed).map_err(PasswordError::Verify)
}
