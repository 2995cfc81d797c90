//! The registered user record.

use chrono::{DateTime, Utc};

use stockroom_core::UserId;

use crate::Role;

/// A registered user.
///
/// Deliberately not `Serialize`: the password hash must never ride along into
/// a response body. The API layer maps users to JSON explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
