//! Category CRUD. Reads are open to every authenticated role; mutations are
//! admin-only.

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use stockroom_auth::{Action, authorize};
use stockroom_catalog::Category;
use stockroom_core::{CategoryId, PageRequest};

use crate::app::errors::{ApiError, internal};
use crate::app::services::AppServices;
use crate::app::{dto, dto::category_to_json};
use crate::context::CurrentUser;

/// GET /categories?all
pub async fn index(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
    Query(params): Query<dto::CategoryListParams>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::CategoryRead)?;

    // `?all` returns everything unpaginated (useful for dropdowns); the array
    // stays nested under `data.data` so both shapes read alike.
    if params.all.is_some() {
        let categories = services
            .categories
            .list_all()
            .await
            .map_err(|e| internal(e, "Failed to fetch categories."))?;
        let data: Vec<_> = categories.iter().map(category_to_json).collect();
        return Ok(Json(serde_json::json!({
            "success": true,
            "data": { "data": data },
        }))
        .into_response());
    }

    let page = services
        .categories
        .page(PageRequest::new(params.page))
        .await
        .map_err(|e| internal(e, "Failed to fetch categories."))?
        .map(|c| category_to_json(&c));

    Ok(Json(serde_json::json!({
        "success": true,
        "data": page,
    }))
    .into_response())
}

/// GET /categories/:id
pub async fn show(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::CategoryRead)?;

    let id: CategoryId = id.parse()?;
    let category = services
        .categories
        .get(id)
        .await
        .map_err(|e| internal(e, "Failed to fetch categories."))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": category_to_json(&category),
    }))
    .into_response())
}

/// POST /categories
pub async fn store(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<dto::CategoryRequest>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::CategoryWrite)?;

    let draft = body.into_input().validate()?;
    let now = Utc::now();
    let category = Category {
        id: CategoryId::new(),
        name: draft.name,
        description: draft.description,
        status: draft.status,
        created_at: now,
        updated_at: now,
    };
    services
        .categories
        .insert(&category)
        .await
        .map_err(|e| internal(e, "Failed to create category."))?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "Category created successfully.",
            "data": category_to_json(&category),
        })),
    )
        .into_response())
}

/// PUT /categories/:id. Full replace of name/description/status.
pub async fn update(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<dto::CategoryRequest>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::CategoryWrite)?;

    let id: CategoryId = id.parse()?;
    let existing = services
        .categories
        .get(id)
        .await
        .map_err(|e| internal(e, "Failed to update category."))?
        .ok_or(ApiError::NotFound)?;

    let draft = body.into_input().validate()?;
    let category = Category {
        name: draft.name,
        description: draft.description,
        status: draft.status,
        updated_at: Utc::now(),
        ..existing
    };
    services
        .categories
        .update(&category)
        .await
        .map_err(|e| internal(e, "Failed to update category."))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Category updated successfully.",
        "data": category_to_json(&category),
    }))
    .into_response())
}

/// DELETE /categories/:id. Hard delete.
pub async fn destroy(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::CategoryDelete)?;

    let id: CategoryId = id.parse()?;
    let deleted = services
        .categories
        .delete(id)
        .await
        .map_err(|e| internal(e, "Failed to delete category."))?;
    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Category deleted successfully.",
    }))
    .into_response())
}
