//! Persistence error model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness or referential-integrity constraint was violated.
    #[error("constraint violated: {0}")]
    Conflict(String),

    /// Any other persistence failure. The message is for logs, never for
    /// response bodies.
    #[error("database error: {0}")]
    Database(String),
}

impl StoreError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() || db.is_foreign_key_violation() {
                return StoreError::Conflict(db.to_string());
            }
        }
        StoreError::Database(err.to_string())
    }
}
