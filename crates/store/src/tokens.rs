//! Bearer token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use stockroom_core::{TokenId, UserId};

use crate::StoreError;

/// A stored bearer token. Only the digest of the secret is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub id: TokenId,
    pub user_id: UserId,
    pub digest: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn insert(&self, token: &TokenRecord) -> Result<(), StoreError>;

    async fn find(&self, id: TokenId) -> Result<Option<TokenRecord>, StoreError>;

    /// Record token usage.
    async fn touch(&self, id: TokenId, at: DateTime<Utc>) -> Result<(), StoreError>;

    /// Revoke a single token. Revoking an already-revoked token is a no-op.
    async fn revoke(&self, id: TokenId) -> Result<(), StoreError>;
}
