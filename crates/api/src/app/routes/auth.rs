//! Registration, login, logout, and the current-user endpoint.

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use stockroom_auth::{User, password, token};
use stockroom_core::{FieldErrors, UserId};
use stockroom_store::TokenRecord;

use crate::app::errors::{ApiError, internal};
use crate::app::services::AppServices;
use crate::app::{dto, dto::user_to_json};
use crate::context::CurrentUser;

/// POST /register
pub async fn register(
    Extension(services): Extension<AppServices>,
    Json(body): Json<dto::RegisterRequest>,
) -> Result<Response, ApiError> {
    let registration = body.into_input().validate()?;

    // Uniqueness is checked up front for a clean 422; the store's unique
    // index still backs it under races.
    let taken = services
        .users
        .find_by_email(&registration.email)
        .await
        .map_err(|e| internal(e, "Registration failed. Please try again."))?
        .is_some();
    if taken {
        return Err(ApiError::Validation(FieldErrors::single(
            "email",
            "The email has already been taken.",
        )));
    }

    let now = Utc::now();
    let password_hash = password::hash_password(&registration.password, services.bcrypt_cost)
        .map_err(|e| internal(e, "Registration failed. Please try again."))?;
    let user = User {
        id: UserId::new(),
        name: registration.name,
        email: registration.email,
        password_hash,
        role: registration.role,
        created_at: now,
        updated_at: now,
    };
    services
        .users
        .insert(&user)
        .await
        .map_err(|e| internal(e, "Registration failed. Please try again."))?;

    let issued = issue_token(&services, &user, "Registration failed. Please try again.").await?;

    tracing::info!("registered user {} ({})", user.id, user.role);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "User registered successfully.",
            "data": {
                "user": user_to_json(&user),
                "token": issued,
            },
        })),
    )
        .into_response())
}

/// POST /login
pub async fn login(
    Extension(services): Extension<AppServices>,
    Json(body): Json<dto::LoginRequest>,
) -> Result<Response, ApiError> {
    let login = body.into_input().validate()?;

    let user = services
        .users
        .find_by_email(&login.email)
        .await
        .map_err(|e| internal(e, "Login failed. Please try again."))?
        .ok_or(ApiError::InvalidCredentials)?;

    let matches = password::verify_password(&login.password, &user.password_hash)
        .map_err(|e| internal(e, "Login failed. Please try again."))?;
    if !matches {
        return Err(ApiError::InvalidCredentials);
    }

    let issued = issue_token(&services, &user, "Login failed. Please try again.").await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Login successful.",
        "data": {
            "user": user_to_json(&user),
            "token": issued,
        },
    }))
    .into_response())
}

/// POST /logout. Revokes only the token this request authenticated with.
pub async fn logout(
    Extension(services): Extension<AppServices>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, ApiError> {
    services
        .tokens
        .revoke(current.token_id())
        .await
        .map_err(|e| internal(e, "Logout failed."))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Logged out successfully.",
    }))
    .into_response())
}

/// GET /me
pub async fn me(Extension(current): Extension<CurrentUser>) -> Response {
    Json(serde_json::json!({
        "success": true,
        "data": user_to_json(current.user()),
    }))
    .into_response()
}

/// Issue a token for `user`, persist its digest, and hand back the one-time
/// plaintext.
async fn issue_token(
    services: &AppServices,
    user: &User,
    failure_message: &'static str,
) -> Result<String, ApiError> {
    let issued = token::issue();
    let record = TokenRecord {
        id: issued.id,
        user_id: user.id,
        digest: issued.digest,
        created_at: Utc::now(),
        last_used_at: None,
    };
    services
        .tokens
        .insert(&record)
        .await
        .map_err(|e| internal(e, failure_message))?;
    Ok(issued.plaintext)
}
