//! Bearer-token authentication middleware.

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use stockroom_auth::token;

use crate::app::errors::ApiError;
use crate::app::services::AppServices;
use crate::context::CurrentUser;

/// Resolve the bearer token into a [`CurrentUser`] request extension.
///
/// Anything short of a stored, digest-matching token for an existing user is
/// a plain 401; the handler never runs.
pub async fn auth_middleware(
    State(services): State<AppServices>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let presented = extract_bearer(req.headers()).ok_or(ApiError::Unauthenticated)?;
    let (token_id, digest) = token::parse(presented).ok_or(ApiError::Unauthenticated)?;

    let record = services
        .tokens
        .find(token_id)
        .await
        .map_err(|e| lookup_failed(e))?
        .filter(|record| record.digest == digest)
        .ok_or(ApiError::Unauthenticated)?;

    let user = services
        .users
        .find_by_id(record.user_id)
        .await
        .map_err(|e| lookup_failed(e))?
        .ok_or(ApiError::Unauthenticated)?;

    if let Err(e) = services.tokens.touch(record.id, Utc::now()).await {
        // Usage bookkeeping must not fail the request.
        tracing::warn!("failed to touch token: {e}");
    }

    req.extensions_mut()
        .insert(CurrentUser::new(user, record.id));

    Ok(next.run(req).await)
}

fn lookup_failed(err: impl core::fmt::Display) -> ApiError {
    tracing::error!("authentication lookup failed: {err}");
    ApiError::Internal("Server error.")
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}
