//! Postgres-backed stores (sqlx).
//!
//! Row mapping is explicit (`try_get`) so the domain crates stay free of
//! database derives. Constraint violations (unique email, category FK) come
//! back as [`StoreError::Conflict`] via the `sqlx::Error` conversion.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use stockroom_auth::{Role, User};
use stockroom_catalog::{Category, EntityStatus, Product};
use stockroom_core::{CategoryId, Page, PageRequest, ProductId, TokenId, UserId};

use crate::{
    CategoryStore, PriceSort, ProductListQuery, ProductStore, ProductWithCategory, StoreError,
    TokenRecord, TokenStore, UserStore,
};

/// Connect to Postgres and run pending migrations.
pub async fn connect(database_url: &str) -> Result<PgPool, StoreError> {
    let pool = PgPool::connect(database_url).await?;
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| StoreError::database(e.to_string()))?;
    Ok(pool)
}

fn parse_role(raw: &str) -> Result<Role, StoreError> {
    raw.parse::<Role>()
        .map_err(|e| StoreError::database(e.to_string()))
}

fn parse_status(raw: &str) -> Result<EntityStatus, StoreError> {
    raw.parse::<EntityStatus>()
        .map_err(|()| StoreError::database(format!("invalid status in row: '{raw}'")))
}

fn user_from_row(row: &PgRow) -> Result<User, StoreError> {
    let role: String = row.try_get("role")?;
    Ok(User {
        id: UserId::from_uuid(row.try_get("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        role: parse_role(&role)?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn category_from_row(row: &PgRow) -> Result<Category, StoreError> {
    let status: String = row.try_get("status")?;
    Ok(Category {
        id: CategoryId::from_uuid(row.try_get("id")?),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        status: parse_status(&status)?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// Map a joined products × categories row (category columns are aliased with
/// a `category_` prefix).
fn product_with_category_from_row(row: &PgRow) -> Result<ProductWithCategory, StoreError> {
    let product_status: String = row.try_get("status")?;
    let category_status: String = row.try_get("category_status")?;

    let category_id = CategoryId::from_uuid(row.try_get("category_id")?);
    let product = Product {
        id: ProductId::from_uuid(row.try_get("id")?),
        name: row.try_get("name")?,
        category_id,
        price: row.try_get::<Decimal, _>("price")?,
        stock: row.try_get("stock")?,
        description: row.try_get("description")?,
        status: parse_status(&product_status)?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    };
    let category = Category {
        id: category_id,
        name: row.try_get("category_name")?,
        description: row.try_get("category_description")?,
        status: parse_status(&category_status)?,
        created_at: row.try_get("category_created_at")?,
        updated_at: row.try_get("category_updated_at")?,
    };
    Ok(ProductWithCategory { product, category })
}

const PRODUCT_JOIN_COLUMNS: &str = "\
    p.id, p.name, p.category_id, p.price, p.stock, p.description, p.status, \
    p.created_at, p.updated_at, \
    c.name AS category_name, c.description AS category_description, \
    c.status AS category_status, c.created_at AS category_created_at, \
    c.updated_at AS category_updated_at";

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(user_from_row).transpose()
    }
}

#[derive(Clone)]
pub struct PgTokenStore {
    pool: PgPool,
}

impl PgTokenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenStore for PgTokenStore {
    async fn insert(&self, token: &TokenRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO auth_tokens (id, user_id, token_digest, created_at, last_used_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(token.id.as_uuid())
        .bind(token.user_id.as_uuid())
        .bind(&token.digest)
        .bind(token.created_at)
        .bind(token.last_used_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, id: TokenId) -> Result<Option<TokenRecord>, StoreError> {
        let row = sqlx::query("SELECT * FROM auth_tokens WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| -> Result<TokenRecord, StoreError> {
            Ok(TokenRecord {
                id: TokenId::from_uuid(row.try_get("id")?),
                user_id: UserId::from_uuid(row.try_get("user_id")?),
                digest: row.try_get("token_digest")?,
                created_at: row.try_get("created_at")?,
                last_used_at: row.try_get("last_used_at")?,
            })
        })
        .transpose()
    }

    async fn touch(&self, id: TokenId, at: DateTime<Utc>) -> Result<(), StoreError> {
        sqlx::query("UPDATE auth_tokens SET last_used_at = $1 WHERE id = $2")
            .bind(at)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn revoke(&self, id: TokenId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM auth_tokens WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn insert(&self, category: &Category) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(category.id.as_uuid())
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.status.as_str())
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE categories
            SET name = $1, description = $2, status = $3, updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.status.as_str())
        .bind(category.updated_at)
        .bind(category.id.as_uuid())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        let row = sqlx::query("SELECT * FROM categories WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(category_from_row).transpose()
    }

    async fn exists(&self, id: CategoryId) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query("SELECT * FROM categories ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(category_from_row).collect()
    }

    async fn page(&self, request: PageRequest) -> Result<Page<Category>, StoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        let rows = sqlx::query(
            r#"
            SELECT * FROM categories
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await?;
        let data = rows
            .iter()
            .map(category_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(data, request, total))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_status(&self, status: EntityStatus) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: &Product) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO products
                (id, name, category_id, price, stock, description, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.name)
        .bind(product.category_id.as_uuid())
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.description)
        .bind(product.status.as_str())
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE products
            SET name = $1, category_id = $2, price = $3, stock = $4,
                description = $5, status = $6, updated_at = $7
            WHERE id = $8
            "#,
        )
        .bind(&product.name)
        .bind(product.category_id.as_uuid())
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.description)
        .bind(product.status.as_str())
        .bind(product.updated_at)
        .bind(product.id.as_uuid())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get(&self, id: ProductId) -> Result<Option<ProductWithCategory>, StoreError> {
        let sql = format!(
            r#"
            SELECT {PRODUCT_JOIN_COLUMNS}
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1
            "#
        );
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(product_with_category_from_row).transpose()
    }

    async fn page(
        &self,
        query: &ProductListQuery,
    ) -> Result<Page<ProductWithCategory>, StoreError> {
        let search = query.search.as_deref();
        let category_id: Option<Uuid> = query.category_id.map(Uuid::from);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products p
            WHERE ($1::text IS NULL OR p.name ILIKE '%' || $1 || '%')
              AND ($2::uuid IS NULL OR p.category_id = $2)
            "#,
        )
        .bind(search)
        .bind(category_id)
        .fetch_one(&self.pool)
        .await?;

        let order = match query.sort_price {
            Some(PriceSort::Asc) => "p.price ASC",
            Some(PriceSort::Desc) => "p.price DESC",
            None => "p.created_at DESC, p.id DESC",
        };
        let sql = format!(
            r#"
            SELECT {PRODUCT_JOIN_COLUMNS}
            FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE ($1::text IS NULL OR p.name ILIKE '%' || $1 || '%')
              AND ($2::uuid IS NULL OR p.category_id = $2)
            ORDER BY {order}
            LIMIT $3 OFFSET $4
            "#
        );
        let rows = sqlx::query(&sql)
            .bind(search)
            .bind(category_id)
            .bind(query.page.limit())
            .bind(query.page.offset())
            .fetch_all(&self.pool)
            .await?;
        let data = rows
            .iter()
            .map(product_with_category_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(data, query.page, total))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_status(&self, status: EntityStatus) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
