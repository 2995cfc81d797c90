//! Store wiring.
//!
//! Every handler works against the trait objects in [`AppServices`]; whether
//! they are backed by memory or Postgres is decided once, here.

use std::sync::Arc;

use anyhow::Context;

use stockroom_store::{
    CategoryStore, MemoryStore, PgCategoryStore, PgProductStore, PgTokenStore, PgUserStore,
    ProductStore, TokenStore, UserStore,
};

use crate::config::ApiConfig;

#[derive(Clone)]
pub struct AppServices {
    pub users: Arc<dyn UserStore>,
    pub tokens: Arc<dyn TokenStore>,
    pub categories: Arc<dyn CategoryStore>,
    pub products: Arc<dyn ProductStore>,
    pub bcrypt_cost: u32,
}

impl AppServices {
    /// In-memory wiring (dev/test): one shared store backs all four traits.
    pub fn in_memory(bcrypt_cost: u32) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            tokens: store.clone(),
            categories: store.clone(),
            products: store,
            bcrypt_cost,
        }
    }

    /// Postgres wiring: one pool, one store per entity.
    pub fn postgres(pool: sqlx::PgPool, bcrypt_cost: u32) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            tokens: Arc::new(PgTokenStore::new(pool.clone())),
            categories: Arc::new(PgCategoryStore::new(pool.clone())),
            products: Arc::new(PgProductStore::new(pool)),
            bcrypt_cost,
        }
    }
}

/// Build services from configuration.
pub async fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    if config.use_persistent_store {
        let database_url = config
            .database_url
            .as_deref()
            .context("DATABASE_URL must be set when USE_PERSISTENT_STORE=true")?;
        let pool = stockroom_store::connect(database_url)
            .await
            .context("failed to connect to Postgres")?;
        tracing::info!("using Postgres stores");
        Ok(AppServices::postgres(pool, config.bcrypt_cost))
    } else {
        tracing::info!("using in-memory stores");
        Ok(AppServices::in_memory(config.bcrypt_cost))
    }
}
