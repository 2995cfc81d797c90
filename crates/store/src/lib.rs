//! `stockroom-store` — persistence boundary.
//!
//! One trait per entity, with two implementations each: an in-memory store
//! for dev/test and a Postgres store (sqlx) for production. Which one backs
//! the API is decided at wiring time.

pub mod categories;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod products;
pub mod tokens;
pub mod users;

pub use categories::CategoryStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::{PgCategoryStore, PgProductStore, PgTokenStore, PgUserStore, connect};
pub use products::{PriceSort, ProductListQuery, ProductStore, ProductWithCategory};
pub use tokens::{TokenRecord, TokenStore};
pub use users::UserStore;
