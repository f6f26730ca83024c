// Offer service - submission, withdrawal, and market queries.
//
// All bidding rules run server-side inside the request; the client is
// never trusted with increment or cap validation.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::bidding::{self, OpenOffer, SubmissionDecision};
use crate::entity::{clubs, offers, players, users};
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::services::settings_service;

#[derive(Debug, Deserialize)]
pub struct SubmitOfferRequest {
    pub player_id: i64,
    pub amount: i64,
}

#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub id: i64,
    pub player_id: i64,
    pub club_id: i64,
    pub amount: i64,
    pub status: String,
    pub created_at: String,
    pub expires_at: String,
    pub settled_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OffersListResponse {
    pub total: usize,
    pub offers: Vec<OfferResponse>,
}

#[derive(Debug, Serialize)]
pub struct WithdrawResponse {
    pub success: bool,
    pub message: String,
}

fn model_to_response(m: &offers::Model) -> OfferResponse {
    OfferResponse {
        id: m.id,
        player_id: m.player_id,
        club_id: m.club_id,
        amount: m.amount,
        status: m.status.clone(),
        created_at: m.created_at.to_string(),
        expires_at: m.expires_at.to_string(),
        settled_at: m.settled_at.map(|t| t.to_string()),
    }
}

/// Submit an offer for a player on behalf of the user's club
pub async fn submit_offer(
    state: &AppState,
    user: &users::Model,
    request: SubmitOfferRequest,
) -> ApiResult<OfferResponse> {
    let settings = settings_service::load_bidding_settings(state).await?;
    if !settings.bidding_enabled {
        return Err(ApiError::Validation(
            "bidding is currently disabled".to_string(),
        ));
    }

    let club_id = user
        .club_id
        .ok_or_else(|| ApiError::Forbidden("user is not attached to a club".to_string()))?;
    let club = state
        .repositories
        .clubs
        .get_by_id(club_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("club {} not found", club_id)))?;
    if !club.available {
        return Err(ApiError::Forbidden(
            "club is not open for signings".to_string(),
        ));
    }

    let player = state
        .repositories
        .players
        .get_by_id(request.player_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("player {} not found", request.player_id)))?;
    if player.club_id == Some(club.id) {
        return Err(ApiError::Validation(
            "player is already on your roster".to_string(),
        ));
    }

    let open_models = state
        .repositories
        .offers
        .find_open_by_player(player.id)
        .await?;
    let open: Vec<OpenOffer> = open_models.iter().map(Into::into).collect();
    let previous_highest = bidding::current_highest(&open).cloned();

    let decision = bidding::evaluate_submission(
        &open,
        club.id,
        request.amount,
        settings.offer_min_increment,
        settings.min_salary,
        settings.max_salary,
    )
    .map_err(|rejection| ApiError::Validation(rejection.to_string()))?;

    check_cap(state, &club, player.id, request.amount).await?;

    let expires_at = (Utc::now() + Duration::hours(settings.bid_duration_hours)).naive_utc();
    let saved = match decision {
        SubmissionDecision::NewOffer => {
            state
                .repositories
                .offers
                .insert_offer(player.id, club.id, request.amount, expires_at)
                .await?
        }
        SubmissionDecision::Extension { offer_id } => {
            state
                .repositories
                .offers
                .extend_offer(offer_id, request.amount, expires_at)
                .await?
        }
    };

    notify_submission(state, &player, &club, previous_highest.as_ref(), &saved).await;

    Ok(model_to_response(&saved))
}

/// Reject the offer when the club's projected spend would exceed its cap.
/// Projection counts the current roster plus the club's other
/// currently-winning open offers.
async fn check_cap(
    state: &AppState,
    club: &clubs::Model,
    target_player_id: i64,
    amount: i64,
) -> ApiResult<()> {
    let roster = state.repositories.players.find_by_club(club.id).await?;
    let roster_salary: i64 = roster.iter().map(|p| p.salary).sum();

    let club_open = state.repositories.offers.find_open_by_club(club.id).await?;
    let mut contested_players: Vec<i64> = club_open.iter().map(|o| o.player_id).collect();
    contested_players.sort_unstable();
    contested_players.dedup();

    let market_models = state
        .repositories
        .offers
        .find_open_by_players(&contested_players)
        .await?;
    let market: Vec<OpenOffer> = market_models.iter().map(Into::into).collect();
    let winning = bidding::winning_amounts_for_club(&market, club.id, Some(target_player_id));

    let projected = bidding::cap_projection(roster_salary, &winning, amount);
    if projected > club.salary_cap {
        return Err(ApiError::Validation(format!(
            "offer would put projected salary {} over the cap {}",
            projected, club.salary_cap
        )));
    }

    Ok(())
}

/// Best-effort notifications after a successful submission. Insert
/// failures are logged and swallowed; the offer stands either way.
async fn notify_submission(
    state: &AppState,
    player: &players::Model,
    club: &clubs::Model,
    previous_highest: Option<&OpenOffer>,
    saved: &offers::Model,
) {
    if let Some(user_id) = player.user_id {
        let message = format!("{} offered {} for you", club.name, saved.amount);
        if let Err(e) = state
            .repositories
            .notifications
            .insert(user_id, "offer_received", &message)
            .await
        {
            tracing::warn!("Failed to insert offer_received notification: {}", e);
        }
    }

    let outbid_club_id = match previous_highest {
        Some(prev) if prev.club_id != saved.club_id => prev.club_id,
        _ => return,
    };

    let managers = match state
        .repositories
        .users
        .find_managers_by_club(outbid_club_id)
        .await
    {
        Ok(managers) => managers,
        Err(e) => {
            tracing::warn!("Failed to load managers for outbid club: {}", e);
            return;
        }
    };

    for manager in managers {
        let message = format!(
            "{} outbid you for {} with {}",
            club.name, player.name, saved.amount
        );
        if let Err(e) = state
            .repositories
            .notifications
            .insert(manager.id, "outbid", &message)
            .await
        {
            tracing::warn!("Failed to insert outbid notification: {}", e);
        }
    }
}

/// Withdraw one of the caller's club's open offers
pub async fn withdraw_offer(
    state: &AppState,
    user: &users::Model,
    offer_id: i64,
) -> ApiResult<WithdrawResponse> {
    let offer = state
        .repositories
        .offers
        .get_by_id(offer_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("offer {} not found", offer_id)))?;

    if user.club_id != Some(offer.club_id) {
        return Err(ApiError::Forbidden(
            "offer belongs to another club".to_string(),
        ));
    }

    if !state.repositories.offers.cancel_if_open(offer_id).await? {
        return Err(ApiError::Validation(
            "offer is no longer open".to_string(),
        ));
    }

    Ok(WithdrawResponse {
        success: true,
        message: format!("offer {} withdrawn", offer_id),
    })
}

/// Open offers across the market, optionally filtered
pub async fn get_open_offers(
    state: &AppState,
    player_id: Option<i64>,
    club_id: Option<i64>,
) -> ApiResult<OffersListResponse> {
    let offers = state
        .repositories
        .offers
        .find_open(player_id, club_id)
        .await?;

    let responses: Vec<OfferResponse> = offers.iter().map(model_to_response).collect();

    Ok(OffersListResponse {
        total: responses.len(),
        offers: responses,
    })
}

/// Every offer for a player regardless of status
pub async fn get_player_offers(state: &AppState, player_id: i64) -> ApiResult<OffersListResponse> {
    let offers = state.repositories.offers.find_by_player(player_id).await?;

    let responses: Vec<OfferResponse> = offers.iter().map(model_to_response).collect();

    Ok(OffersListResponse {
        total: responses.len(),
        offers: responses,
    })
}

/// The current highest open offer for a player, if any
pub async fn get_highest_offer(
    state: &AppState,
    player_id: i64,
) -> ApiResult<Option<OfferResponse>> {
    let open_models = state
        .repositories
        .offers
        .find_open_by_player(player_id)
        .await?;
    let open: Vec<OpenOffer> = open_models.iter().map(Into::into).collect();

    let highest = bidding::current_highest(&open)
        .and_then(|winner| open_models.iter().find(|m| m.id == winner.id));

    Ok(highest.map(model_to_response))
}
