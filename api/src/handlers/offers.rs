// Handlers for offer submission and listing endpoints

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

use crate::auth;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::services::offer_service::{
    self, OfferResponse, OffersListResponse, SubmitOfferRequest, WithdrawResponse,
};

/// POST /offers
/// Submits a free-agency offer for a player on behalf of the caller's club
pub async fn submit_offer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SubmitOfferRequest>,
) -> ApiResult<Json<OfferResponse>> {
    let user = auth::authenticate(&state, &headers).await?;
    let response = offer_service::submit_offer(&state, &user, request).await?;
    Ok(Json(response))
}

/// DELETE /offers/{id}
/// Withdraws one of the caller's club's open offers
pub async fn withdraw_offer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<WithdrawResponse>> {
    let user = auth::authenticate(&state, &headers).await?;
    let response = offer_service::withdraw_offer(&state, &user, id).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct OpenOffersQuery {
    pub player_id: Option<i64>,
    pub club_id: Option<i64>,
}

/// GET /offers?player_id=...&club_id=...
/// Returns open offers, highest ranked first
pub async fn get_open_offers(
    State(state): State<AppState>,
    Query(params): Query<OpenOffersQuery>,
) -> ApiResult<Json<OffersListResponse>> {
    let response = offer_service::get_open_offers(&state, params.player_id, params.club_id).await?;
    Ok(Json(response))
}
