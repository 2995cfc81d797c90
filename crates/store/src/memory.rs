//! In-memory stores for dev/test.
//!
//! One [`MemoryStore`] models the whole database, so cross-entity rules
//! (email uniqueness, the category→product reference) behave like their SQL
//! counterparts.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use stockroom_auth::User;
use stockroom_catalog::{Category, EntityStatus, Product};
use stockroom_core::{CategoryId, Page, PageRequest, ProductId, TokenId, UserId};

use crate::{
    CategoryStore, PriceSort, ProductListQuery, ProductStore, ProductWithCategory, StoreError,
    TokenRecord, TokenStore, UserStore,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, User>>,
    tokens: RwLock<HashMap<TokenId, TokenRecord>>,
    categories: RwLock<HashMap<CategoryId, Category>>,
    products: RwLock<HashMap<ProductId, Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::database("store lock poisoned")
}

/// Newest first; ids are time-ordered (UUIDv7), so they break timestamp ties.
fn newest_first<T, I: Ord>(items: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, I)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

fn slice_page<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total = items.len() as i64;
    let data = items
        .iter()
        .skip(request.offset() as usize)
        .take(request.limit() as usize)
        .cloned()
        .collect();
    Page::new(data, request, total)
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::conflict("users.email must be unique"));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn insert(&self, token: &TokenRecord) -> Result<(), StoreError> {
        let mut tokens = self.tokens.write().map_err(|_| poisoned())?;
        tokens.insert(token.id, token.clone());
        Ok(())
    }

    async fn find(&self, id: TokenId) -> Result<Option<TokenRecord>, StoreError> {
        let tokens = self.tokens.read().map_err(|_| poisoned())?;
        Ok(tokens.get(&id).cloned())
    }

    async fn touch(&self, id: TokenId, at: DateTime<Utc>) -> Result<(), StoreError> {
        let mut tokens = self.tokens.write().map_err(|_| poisoned())?;
        if let Some(token) = tokens.get_mut(&id) {
            token.last_used_at = Some(at);
        }
        Ok(())
    }

    async fn revoke(&self, id: TokenId) -> Result<(), StoreError> {
        let mut tokens = self.tokens.write().map_err(|_| poisoned())?;
        tokens.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn insert(&self, category: &Category) -> Result<(), StoreError> {
        let mut categories = self.categories.write().map_err(|_| poisoned())?;
        categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), StoreError> {
        let mut categories = self.categories.write().map_err(|_| poisoned())?;
        categories.insert(category.id, category.clone());
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, StoreError> {
        let products = self.products.read().map_err(|_| poisoned())?;
        if products.values().any(|p| p.category_id == id) {
            return Err(StoreError::conflict(
                "category is still referenced by products",
            ));
        }
        drop(products);

        let mut categories = self.categories.write().map_err(|_| poisoned())?;
        Ok(categories.remove(&id).is_some())
    }

    async fn get(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        let categories = self.categories.read().map_err(|_| poisoned())?;
        Ok(categories.get(&id).cloned())
    }

    async fn exists(&self, id: CategoryId) -> Result<bool, StoreError> {
        let categories = self.categories.read().map_err(|_| poisoned())?;
        Ok(categories.contains_key(&id))
    }

    async fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        let categories = self.categories.read().map_err(|_| poisoned())?;
        let mut all: Vec<Category> = categories.values().cloned().collect();
        newest_first(&mut all, |c| (c.created_at, *c.id.as_uuid()));
        Ok(all)
    }

    async fn page(&self, request: PageRequest) -> Result<Page<Category>, StoreError> {
        let all = self.list_all().await?;
        Ok(slice_page(&all, request))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let categories = self.categories.read().map_err(|_| poisoned())?;
        Ok(categories.len() as i64)
    }

    async fn count_by_status(&self, status: EntityStatus) -> Result<i64, StoreError> {
        let categories = self.categories.read().map_err(|_| poisoned())?;
        Ok(categories.values().filter(|c| c.status == status).count() as i64)
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn insert(&self, product: &Product) -> Result<(), StoreError> {
        if !self.exists(product.category_id).await? {
            return Err(StoreError::conflict("product references missing category"));
        }
        let mut products = self.products.write().map_err(|_| poisoned())?;
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        if !self.exists(product.category_id).await? {
            return Err(StoreError::conflict("product references missing category"));
        }
        let mut products = self.products.write().map_err(|_| poisoned())?;
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut products = self.products.write().map_err(|_| poisoned())?;
        Ok(products.remove(&id).is_some())
    }

    async fn get(&self, id: ProductId) -> Result<Option<ProductWithCategory>, StoreError> {
        let products = self.products.read().map_err(|_| poisoned())?;
        let Some(product) = products.get(&id).cloned() else {
            return Ok(None);
        };
        drop(products);

        let categories = self.categories.read().map_err(|_| poisoned())?;
        let category = categories
            .get(&product.category_id)
            .cloned()
            .ok_or_else(|| StoreError::database("product row without category"))?;
        Ok(Some(ProductWithCategory { product, category }))
    }

    async fn page(
        &self,
        query: &ProductListQuery,
    ) -> Result<Page<ProductWithCategory>, StoreError> {
        let products = self.products.read().map_err(|_| poisoned())?;
        let search = query.search.as_ref().map(|s| s.to_lowercase());

        let mut matched: Vec<Product> = products
            .values()
            .filter(|p| {
                search
                    .as_ref()
                    .is_none_or(|s| p.name.to_lowercase().contains(s))
            })
            .filter(|p| query.category_id.is_none_or(|c| p.category_id == c))
            .cloned()
            .collect();
        drop(products);

        match query.sort_price {
            Some(PriceSort::Asc) => matched.sort_by(|a, b| a.price.cmp(&b.price)),
            Some(PriceSort::Desc) => matched.sort_by(|a, b| b.price.cmp(&a.price)),
            None => newest_first(&mut matched, |p| (p.created_at, *p.id.as_uuid())),
        }

        let categories = self.categories.read().map_err(|_| poisoned())?;
        let page = slice_page(&matched, query.page);
        let data = page
            .data
            .iter()
            .map(|product| {
                let category = categories
                    .get(&product.category_id)
                    .cloned()
                    .ok_or_else(|| StoreError::database("product row without category"))?;
                Ok(ProductWithCategory {
                    product: product.clone(),
                    category,
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Page {
            current_page: page.current_page,
            data,
            per_page: page.per_page,
            total: page.total,
            last_page: page.last_page,
        })
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(products.len() as i64)
    }

    async fn count_by_status(&self, status: EntityStatus) -> Result<i64, StoreError> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(products.values().filter(|p| p.status == status).count() as i64)
    }
}
