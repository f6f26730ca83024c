// Club service - listings and salary-cap projection

use serde::Serialize;

use crate::domain::bidding::{self, OpenOffer};
use crate::entity::clubs;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;

#[derive(Debug, Serialize)]
pub struct ClubResponse {
    pub id: i64,
    pub name: String,
    pub salary_cap: i64,
    pub available: bool,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct ClubsListResponse {
    pub total: usize,
    pub clubs: Vec<ClubResponse>,
}

/// Cap projection for a club: roster spend plus currently-winning offers
#[derive(Debug, Serialize)]
pub struct CapSpaceResponse {
    pub club_id: i64,
    pub salary_cap: i64,
    pub roster_size: usize,
    pub roster_salary: i64,
    pub pending_winning_offers: i64,
    pub projected_spend: i64,
    pub cap_space: i64,
}

fn model_to_response(m: &clubs::Model) -> ClubResponse {
    ClubResponse {
        id: m.id,
        name: m.name.clone(),
        salary_cap: m.salary_cap,
        available: m.available,
        created_at: m.created_at.to_string(),
    }
}

/// All clubs
pub async fn get_clubs(state: &AppState) -> ApiResult<ClubsListResponse> {
    let clubs = state.repositories.clubs.find_all().await?;

    let responses: Vec<ClubResponse> = clubs.iter().map(model_to_response).collect();

    Ok(ClubsListResponse {
        total: responses.len(),
        clubs: responses,
    })
}

/// A single club by id
pub async fn get_club(state: &AppState, id: i64) -> ApiResult<ClubResponse> {
    let club = state
        .repositories
        .clubs
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("club {} not found", id)))?;

    Ok(model_to_response(&club))
}

/// Projected cap position for a club. Pending spend counts only the
/// club's open offers that currently lead their player's auction.
pub async fn get_cap_space(state: &AppState, id: i64) -> ApiResult<CapSpaceResponse> {
    let club = state
        .repositories
        .clubs
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("club {} not found", id)))?;

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
    let pending: i64 = bidding::winning_amounts_for_club(&market, club.id, None)
        .iter()
        .sum();

    let projected_spend = roster_salary + pending;

    Ok(CapSpaceResponse {
        club_id: club.id,
        salary_cap: club.salary_cap,
        roster_size: roster.len(),
        roster_salary,
        pending_winning_offers: pending,
        projected_spend,
        cap_space: club.salary_cap - projected_spend,
    })
}
