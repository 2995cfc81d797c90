//! Environment-driven configuration.

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to serve on (`BIND_ADDR`, default `0.0.0.0:8080`).
    pub bind_addr: String,

    /// `USE_PERSISTENT_STORE=true` selects Postgres; anything else selects
    /// the in-memory stores (dev/test).
    pub use_persistent_store: bool,

    /// Postgres connection string (`DATABASE_URL`); required when the
    /// persistent store is selected.
    pub database_url: Option<String>,

    /// bcrypt work factor (`BCRYPT_COST`).
    pub bcrypt_cost: u32,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let use_persistent_store = std::env::var("USE_PERSISTENT_STORE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(stockroom_auth::password::DEFAULT_COST);

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            use_persistent_store,
            database_url: std::env::var("DATABASE_URL").ok(),
            bcrypt_cost,
        }
    }
}
