// Notification service - per-user listings and read tracking

use serde::Serialize;

use crate::entity::{notifications, users};
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub kind: String,
    pub message: String,
    pub read: bool,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct NotificationsListResponse {
    pub total: usize,
    pub unread: usize,
    pub notifications: Vec<NotificationResponse>,
}

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub success: bool,
}

fn model_to_response(m: &notifications::Model) -> NotificationResponse {
    NotificationResponse {
        id: m.id,
        kind: m.kind.clone(),
        message: m.message.clone(),
        read: m.read,
        created_at: m.created_at.to_string(),
    }
}

/// The caller's notifications, newest first
pub async fn get_notifications(
    state: &AppState,
    user: &users::Model,
) -> ApiResult<NotificationsListResponse> {
    let notifications = state
        .repositories
        .notifications
        .find_by_user(user.id)
        .await?;

    let unread = notifications.iter().filter(|n| !n.read).count();
    let responses: Vec<NotificationResponse> =
        notifications.iter().map(model_to_response).collect();

    Ok(NotificationsListResponse {
        total: responses.len(),
        unread,
        notifications: responses,
    })
}

/// Mark one of the caller's notifications read
pub async fn mark_read(
    state: &AppState,
    user: &users::Model,
    id: i64,
) -> ApiResult<MarkReadResponse> {
    let updated = state
        .repositories
        .notifications
        .mark_read(id, user.id)
        .await?;

    if !updated {
        return Err(ApiError::NotFound(format!("notification {} not found", id)));
    }

    Ok(MarkReadResponse { success: true })
}
