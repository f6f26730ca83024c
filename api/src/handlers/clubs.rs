// Handlers for club endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::services::club_service::{self, CapSpaceResponse, ClubResponse, ClubsListResponse};

/// GET /clubs
pub async fn get_clubs(State(state): State<AppState>) -> ApiResult<Json<ClubsListResponse>> {
    let response = club_service::get_clubs(&state).await?;
    Ok(Json(response))
}

/// GET /clubs/{id}
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ClubResponse>> {
    let response = club_service::get_club(&state, id).await?;
    Ok(Json(response))
}

/// GET /clubs/{id}/cap-space
/// Projects the club's spend including its currently-winning open offers
pub async fn get_club_cap_space(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CapSpaceResponse>> {
    let response = club_service::get_cap_space(&state, id).await?;
    Ok(Json(response))
}
