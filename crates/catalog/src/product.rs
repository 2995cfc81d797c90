//! Product record and validated input.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use stockroom_core::{CategoryId, DomainResult, FieldErrors, ProductId};

use crate::EntityStatus;

const NAME_MAX: usize = 255;

/// A product. Belongs to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub price: Decimal,
    pub stock: i32,
    pub description: Option<String>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw product fields as presented by the client.
///
/// `category_id` stays a string here so that a malformed id surfaces as a
/// field error, not a deserialization failure.
#[derive(Debug, Default, Clone)]
pub struct ProductInput {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Validated product fields, ready to persist (create or full replace).
///
/// Existence of the referenced category is a store concern and checked by the
/// caller before persisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category_id: CategoryId,
    pub price: Decimal,
    pub stock: i32,
    pub description: Option<String>,
    pub status: EntityStatus,
}

impl ProductInput {
    /// Validate every field, collecting per-field messages.
    pub fn validate(self) -> DomainResult<ProductDraft> {
        let mut errors = FieldErrors::new();

        let name = self.name.filter(|n| !n.is_empty());
        match &name {
            None => errors.push("name", "The name field is required."),
            Some(name) => {
                if name.chars().count() > NAME_MAX {
                    errors.push("name", "The name may not be greater than 255 characters.");
                }
            }
        }

        let category_id = match self.category_id.filter(|c| !c.is_empty()) {
            None => {
                errors.push("category_id", "The category id field is required.");
                None
            }
            Some(raw) => match raw.parse::<CategoryId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push("category_id", "The selected category id is invalid.");
                    None
                }
            },
        };

        let price = match self.price {
            None => {
                errors.push("price", "The price field is required.");
                None
            }
            Some(price) => {
                if price < Decimal::ZERO {
                    errors.push("price", "The price must be at least 0.");
                    None
                } else {
                    Some(price)
                }
            }
        };

        let stock = match self.stock {
            None => {
                errors.push("stock", "The stock field is required.");
                None
            }
            Some(stock) => {
                if stock < 0 {
                    errors.push("stock", "The stock must be at least 0.");
                    None
                } else if stock > i32::MAX as i64 {
                    errors.push("stock", "The stock is too large.");
                    None
                } else {
                    Some(stock as i32)
                }
            }
        };

        let status = match self.status.filter(|s| !s.is_empty()) {
            None => {
                errors.push("status", "The status field is required.");
                None
            }
            Some(raw) => match raw.parse::<EntityStatus>() {
                Ok(status) => Some(status),
                Err(()) => {
                    errors.push("status", "The selected status is invalid.");
                    None
                }
            },
        };

        errors.finish()?;

        Ok(ProductDraft {
            name: name.expect("validated"),
            category_id: category_id.expect("validated"),
            price: price.expect("validated"),
            stock: stock.expect("validated"),
            description: self.description.filter(|d| !d.is_empty()),
            status: status.expect("validated"),
        })
    }
}
