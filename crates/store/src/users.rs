//! User persistence.

use async_trait::async_trait;

use stockroom_auth::User;
use stockroom_core::UserId;

use crate::StoreError;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. Fails with [`StoreError::Conflict`] when the email
    /// is already taken.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}
