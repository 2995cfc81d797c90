//! Product persistence.

use async_trait::async_trait;

use stockroom_catalog::{Category, EntityStatus, Product};
use stockroom_core::{CategoryId, Page, PageRequest, ProductId};

use crate::StoreError;

/// A product with its category joined in, as the API always returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductWithCategory {
    pub product: Product,
    pub category: Category,
}

/// Price ordering for product listings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PriceSort {
    Asc,
    Desc,
}

impl PriceSort {
    /// Parse the `sort_price` query value. Anything but `asc`/`desc` means
    /// "no price sort" (the listing falls back to newest-first).
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some("asc") => Some(PriceSort::Asc),
            Some("desc") => Some(PriceSort::Desc),
            _ => None,
        }
    }
}

/// Listing parameters for [`ProductStore::page`].
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
    /// Exact category filter.
    pub category_id: Option<CategoryId>,
    /// Price ordering; `None` orders newest-first.
    pub sort_price: Option<PriceSort>,
    pub page: PageRequest,
}

impl ProductListQuery {
    pub fn all(page: PageRequest) -> Self {
        Self {
            search: None,
            category_id: None,
            sort_price: None,
            page,
        }
    }
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product. The referenced category must exist.
    async fn insert(&self, product: &Product) -> Result<(), StoreError>;

    /// Full replace of a previously loaded product.
    async fn update(&self, product: &Product) -> Result<(), StoreError>;

    /// Hard delete. Returns whether the product existed.
    async fn delete(&self, id: ProductId) -> Result<bool, StoreError>;

    async fn get(&self, id: ProductId) -> Result<Option<ProductWithCategory>, StoreError>;

    /// Filtered, sorted, 10-per-page listing with the category joined in.
    async fn page(&self, query: &ProductListQuery)
    -> Result<Page<ProductWithCategory>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    async fn count_by_status(&self, status: EntityStatus) -> Result<i64, StoreError>;
}
