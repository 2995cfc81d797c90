//! Category persistence.

use async_trait::async_trait;

use stockroom_catalog::{Category, EntityStatus};
use stockroom_core::{CategoryId, Page, PageRequest};

use crate::StoreError;

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn insert(&self, category: &Category) -> Result<(), StoreError>;

    /// Full replace of a previously loaded category.
    async fn update(&self, category: &Category) -> Result<(), StoreError>;

    /// Hard delete. Returns whether the category existed. Fails with
    /// [`StoreError::Conflict`] when products still reference it.
    async fn delete(&self, id: CategoryId) -> Result<bool, StoreError>;

    async fn get(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;

    async fn exists(&self, id: CategoryId) -> Result<bool, StoreError>;

    /// Every category, newest first.
    async fn list_all(&self) -> Result<Vec<Category>, StoreError>;

    /// Newest first, 10 per page.
    async fn page(&self, request: PageRequest) -> Result<Page<Category>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    async fn count_by_status(&self, status: EntityStatus) -> Result<i64, StoreError>;
}
