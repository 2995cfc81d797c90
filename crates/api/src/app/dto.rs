//! Request DTOs and JSON mapping helpers.
//!
//! One request struct per endpoint; every field rides in as presented and is
//! validated explicitly before anything domain-shaped is constructed.

use rust_decimal::Decimal;
use serde::Deserialize;

use stockroom_auth::{LoginInput, RegistrationInput, User};
use stockroom_catalog::{Category, CategoryInput, ProductInput};
use stockroom_store::ProductWithCategory;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
    pub role: Option<String>,
}

impl RegisterRequest {
    pub fn into_input(self) -> RegistrationInput {
        RegistrationInput {
            name: self.name,
            email: self.email,
            password: self.password,
            password_confirmation: self.password_confirmation,
            role: self.role,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn into_input(self) -> LoginInput {
        LoginInput {
            email: self.email,
            password: self.password,
        }
    }
}

/// Create and full-replace share the same field set.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl CategoryRequest {
    pub fn into_input(self) -> CategoryInput {
        CategoryInput {
            name: self.name,
            description: self.description,
            status: self.status,
        }
    }
}

/// Create and full-replace share the same field set.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl ProductRequest {
    pub fn into_input(self) -> ProductInput {
        ProductInput {
            name: self.name,
            category_id: self.category_id,
            price: self.price,
            stock: self.stock,
            description: self.description,
            status: self.status,
        }
    }
}

/// `?all` is a presence flag: any value (even empty) selects the unpaginated
/// listing.
#[derive(Debug, Deserialize)]
pub struct CategoryListParams {
    pub all: Option<String>,
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    pub search: Option<String>,
    pub category_id: Option<String>,
    pub sort_price: Option<String>,
    pub page: Option<i64>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// User record without the password hash.
pub fn user_to_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "role": user.role,
        "created_at": user.created_at,
        "updated_at": user.updated_at,
    })
}

pub fn category_to_json(category: &Category) -> serde_json::Value {
    serde_json::json!({
        "id": category.id,
        "name": category.name,
        "description": category.description,
        "status": category.status,
        "created_at": category.created_at,
        "updated_at": category.updated_at,
    })
}

/// Product with its category embedded, as every product response carries it.
pub fn product_to_json(item: &ProductWithCategory) -> serde_json::Value {
    serde_json::json!({
        "id": item.product.id,
        "name": item.product.name,
        "category_id": item.product.category_id,
        "price": item.product.price,
        "stock": item.product.stock,
        "description": item.product.description,
        "status": item.product.status,
        "created_at": item.product.created_at,
        "updated_at": item.product.updated_at,
        "category": category_to_json(&item.category),
    })
}
