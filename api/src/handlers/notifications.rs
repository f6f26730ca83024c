// Handlers for notification endpoints

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::auth;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::services::notification_service::{
    self, MarkReadResponse, NotificationsListResponse,
};

/// GET /notifications
/// Returns the caller's notifications, newest first
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<NotificationsListResponse>> {
    let user = auth::authenticate(&state, &headers).await?;
    let response = notification_service::get_notifications(&state, &user).await?;
    Ok(Json(response))
}

/// POST /notifications/{id}/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<MarkReadResponse>> {
    let user = auth::authenticate(&state, &headers).await?;
    let response = notification_service::mark_read(&state, &user, id).await?;
    Ok(Json(response))
}
