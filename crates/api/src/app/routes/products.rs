//! Product CRUD. Reads are open to every authenticated role; create/update
//! allow managers, deletes are admin-only.

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use stockroom_auth::{Action, authorize};
use stockroom_catalog::{Product, ProductDraft};
use stockroom_core::{CategoryId, FieldErrors, Page, PageRequest, ProductId};
use stockroom_store::{PriceSort, ProductListQuery, ProductWithCategory};

use crate::app::errors::{ApiError, internal};
use crate::app::services::AppServices;
use crate::app::{dto, dto::product_to_json};
use crate::context::CurrentUser;

/// GET /products?search=&category_id=&sort_price=asc|desc&page=
pub async fn index(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
    Query(params): Query<dto::ProductListParams>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::ProductRead)?;

    let page_request = PageRequest::new(params.page);

    // An unparseable category filter can match nothing.
    let category_id = match params.category_id.as_deref().filter(|c| !c.is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<CategoryId>() {
            Ok(id) => Some(id),
            Err(_) => {
                let empty: Page<serde_json::Value> = Page::new(Vec::new(), page_request, 0);
                return Ok(Json(serde_json::json!({
                    "success": true,
                    "data": empty,
                }))
                .into_response());
            }
        },
    };

    let query = ProductListQuery {
        search: params.search.filter(|s| !s.is_empty()),
        category_id,
        sort_price: PriceSort::parse(params.sort_price.as_deref()),
        page: page_request,
    };
    let page = services
        .products
        .page(&query)
        .await
        .map_err(|e| internal(e, "Failed to fetch products."))?
        .map(|p| product_to_json(&p));

    Ok(Json(serde_json::json!({
        "success": true,
        "data": page,
    }))
    .into_response())
}

/// GET /products/:id
pub async fn show(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::ProductRead)?;

    let id: ProductId = id.parse()?;
    let item = services
        .products
        .get(id)
        .await
        .map_err(|e| internal(e, "Failed to fetch products."))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": product_to_json(&item),
    }))
    .into_response())
}

/// POST /products
pub async fn store(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<dto::ProductRequest>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::ProductWrite)?;

    let draft = body.into_input().validate()?;
    let category = load_category(&services, &draft, "Failed to create product.").await?;

    let now = Utc::now();
    let product = Product {
        id: ProductId::new(),
        name: draft.name,
        category_id: draft.category_id,
        price: draft.price,
        stock: draft.stock,
        description: draft.description,
        status: draft.status,
        created_at: now,
        updated_at: now,
    };
    services
        .products
        .insert(&product)
        .await
        .map_err(|e| internal(e, "Failed to create product."))?;

    let item = ProductWithCategory { product, category };
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "Product created successfully.",
            "data": product_to_json(&item),
        })),
    )
        .into_response())
}

/// PUT /products/:id. Full replace of every product field.
pub async fn update(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProductRequest>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::ProductWrite)?;

    let id: ProductId = id.parse()?;
    let existing = services
        .products
        .get(id)
        .await
        .map_err(|e| internal(e, "Failed to update product."))?
        .ok_or(ApiError::NotFound)?;

    let draft = body.into_input().validate()?;
    let category = load_category(&services, &draft, "Failed to update product.").await?;

    let product = Product {
        name: draft.name,
        category_id: draft.category_id,
        price: draft.price,
        stock: draft.stock,
        description: draft.description,
        status: draft.status,
        updated_at: Utc::now(),
        ..existing.product
    };
    services
        .products
        .update(&product)
        .await
        .map_err(|e| internal(e, "Failed to update product."))?;

    let item = ProductWithCategory { product, category };
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Product updated successfully.",
        "data": product_to_json(&item),
    }))
    .into_response())
}

/// DELETE /products/:id. Hard delete.
pub async fn destroy(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::ProductDelete)?;

    let id: ProductId = id.parse()?;
    let deleted = services
        .products
        .delete(id)
        .await
        .map_err(|e| internal(e, "Failed to delete product."))?;
    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Product deleted successfully.",
    }))
    .into_response())
}

/// The referenced category must exist; a missing one is a validation error
/// on `category_id`, never a 500.
async fn load_category(
    services: &AppServices,
    draft: &ProductDraft,
    failure_message: &'static str,
) -> Result<stockroom_catalog::Category, ApiError> {
    services
        .categories
        .get(draft.category_id)
        .await
        .map_err(|e| internal(e, failure_message))?
        .ok_or_else(|| {
            ApiError::Validation(FieldErrors::single(
                "category_id",
                "The selected category id is invalid.",
            ))
        })
}
