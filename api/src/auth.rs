// Per-request authentication and role checks.
//
// The auth platform itself is external; requests arrive with the
// platform-issued user id in the X-User-Id header, and every protected
// handler validates it against the users and banned_users tables before
// touching anything else.

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::entity::users;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;

const USER_ID_HEADER: &str = "x-user-id";

/// Resolve the calling user or fail with 401/403
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> ApiResult<users::Model> {
    let raw = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("missing X-User-Id header".to_string()))?;

    let user_id = Uuid::parse_str(raw)
        .map_err(|_| ApiError::Unauthorized("malformed X-User-Id header".to_string()))?;

    let user = state
        .repositories
        .users
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("unknown user".to_string()))?;

    if state.repositories.banned_users.is_banned(user.id).await? {
        return Err(ApiError::Forbidden("user is banned".to_string()));
    }

    Ok(user)
}

/// Resolve the calling user and require the admin role
pub async fn require_admin(state: &AppState, headers: &HeaderMap) -> ApiResult<users::Model> {
    let user = authenticate(state, headers).await?;

    if user.role != "admin" {
        return Err(ApiError::Forbidden("admin role required".to_string()));
    }

    Ok(user)
}
