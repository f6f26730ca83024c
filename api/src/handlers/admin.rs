// Handlers for admin endpoints. Every handler re-validates the admin role
// against the users table before acting.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::services::admin_service::{
    self, AvailabilityResponse, BanResponse, BannedUsersListResponse, PlayerMappingsListResponse,
    SettingsResponse, UpdateSettingsRequest,
};

/// GET /admin/settings
pub async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<SettingsResponse>> {
    auth::require_admin(&state, &headers).await?;
    let response = admin_service::get_settings(&state).await?;
    Ok(Json(response))
}

/// PUT /admin/settings
/// Updates any subset of the bidding settings
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateSettingsRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    auth::require_admin(&state, &headers).await?;
    let response = admin_service::update_settings(&state, request).await?;
    Ok(Json(response))
}

/// GET /admin/banned-users
pub async fn list_banned_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<BannedUsersListResponse>> {
    auth::require_admin(&state, &headers).await?;
    let response = admin_service::list_banned_users(&state).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct BanUserRequest {
    pub user_id: Uuid,
    pub reason: Option<String>,
}

/// POST /admin/banned-users
pub async fn ban_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<BanUserRequest>,
) -> ApiResult<Json<BanResponse>> {
    let admin = auth::require_admin(&state, &headers).await?;
    let response =
        admin_service::ban_user(&state, &admin, request.user_id, request.reason.as_deref()).await?;
    Ok(Json(response))
}

/// DELETE /admin/banned-users/{user_id}
pub async fn unban_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<BanResponse>> {
    auth::require_admin(&state, &headers).await?;
    let response = admin_service::unban_user(&state, user_id).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct SetAvailabilityRequest {
    pub available: bool,
}

/// PUT /admin/clubs/{id}/availability
pub async fn set_club_availability(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(request): Json<SetAvailabilityRequest>,
) -> ApiResult<Json<AvailabilityResponse>> {
    auth::require_admin(&state, &headers).await?;
    let response = admin_service::set_club_availability(&state, id, request.available).await?;
    Ok(Json(response))
}

/// GET /admin/player-mappings
pub async fn list_player_mappings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<PlayerMappingsListResponse>> {
    auth::require_admin(&state, &headers).await?;
    let response = admin_service::list_player_mappings(&state).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct UpsertPlayerMappingRequest {
    pub ea_name: String,
    pub player_id: i64,
}

/// PUT /admin/player-mappings
pub async fn upsert_player_mapping(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpsertPlayerMappingRequest>,
) -> ApiResult<Json<PlayerMappingsListResponse>> {
    auth::require_admin(&state, &headers).await?;
    let response =
        admin_service::upsert_player_mapping(&state, &request.ea_name, request.player_id).await?;
    Ok(Json(response))
}
