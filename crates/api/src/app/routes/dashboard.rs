//! Role-conditioned statistics.

use axum::{
    Json,
    extract::Extension,
    response::{IntoResponse, Response},
};

use stockroom_auth::{Action, Role, authorize};
use stockroom_catalog::EntityStatus;

use crate::app::errors::{ApiError, internal};
use crate::app::services::AppServices;
use crate::context::CurrentUser;

/// GET /dashboard/stats
///
/// Admin and manager both see product counts; category counts are admin-only.
/// Keys the role may not see are absent, not null.
pub async fn stats(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, ApiError> {
    authorize(current.role(), Action::DashboardView)?;

    let mut stats = serde_json::Map::new();

    if matches!(current.role(), Role::Admin | Role::Manager) {
        let total = services
            .products
            .count()
            .await
            .map_err(|e| internal(e, "Failed to fetch dashboard stats."))?;
        let active = services
            .products
            .count_by_status(EntityStatus::Active)
            .await
            .map_err(|e| internal(e, "Failed to fetch dashboard stats."))?;
        stats.insert("total_products".to_string(), total.into());
        stats.insert("active_products".to_string(), active.into());
    }

    if current.role() == Role::Admin {
        let total = services
            .categories
            .count()
            .await
            .map_err(|e| internal(e, "Failed to fetch dashboard stats."))?;
        let active = services
            .categories
            .count_by_status(EntityStatus::Active)
            .await
            .map_err(|e| internal(e, "Failed to fetch dashboard stats."))?;
        stats.insert("total_categories".to_string(), total.into());
        stats.insert("active_categories".to_string(), active.into());
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "data": stats,
    }))
    .into_response())
}
