// Handlers for player and per-player offer endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::services::offer_service::{self, OfferResponse, OffersListResponse};
use crate::services::player_service::{self, PlayerResponse, PlayersListResponse};

#[derive(Debug, Deserialize)]
pub struct PlayersQuery {
    #[serde(default)]
    pub free_agents: bool,
}

/// GET /players?free_agents=true
pub async fn get_players(
    State(state): State<AppState>,
    Query(params): Query<PlayersQuery>,
) -> ApiResult<Json<PlayersListResponse>> {
    let response = player_service::get_players(&state, params.free_agents).await?;
    Ok(Json(response))
}

/// GET /players/{id}
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PlayerResponse>> {
    let response = player_service::get_player(&state, id).await?;
    Ok(Json(response))
}

/// GET /players/{id}/offers
/// Returns every offer for the player regardless of status, newest first
pub async fn get_player_offers(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<OffersListResponse>> {
    let response = offer_service::get_player_offers(&state, id).await?;
    Ok(Json(response))
}

/// GET /players/{id}/offers/highest
/// Returns the current highest open offer for the player, if any
pub async fn get_player_highest_offer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Option<OfferResponse>>> {
    let response = offer_service::get_highest_offer(&state, id).await?;
    Ok(Json(response))
}
