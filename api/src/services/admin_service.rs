// Admin service - bidding settings, bans, club availability, mappings

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{banned_users, ea_player_mappings, users};
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::services::settings_service;

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub bidding_enabled: bool,
    pub bid_duration_hours: i64,
    pub offer_min_increment: i64,
    pub min_salary: i64,
    pub max_salary: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub bidding_enabled: Option<bool>,
    pub bid_duration_hours: Option<i64>,
    pub offer_min_increment: Option<i64>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct BannedUserResponse {
    pub user_id: Uuid,
    pub reason: Option<String>,
    pub banned_by: Option<Uuid>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct BannedUsersListResponse {
    pub total: usize,
    pub banned_users: Vec<BannedUserResponse>,
}

#[derive(Debug, Serialize)]
pub struct BanResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub club_id: i64,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct PlayerMappingResponse {
    pub id: i64,
    pub ea_name: String,
    pub player_id: i64,
}

#[derive(Debug, Serialize)]
pub struct PlayerMappingsListResponse {
    pub total: usize,
    pub mappings: Vec<PlayerMappingResponse>,
}

fn settings_to_response(s: &settings_service::BiddingSettings) -> SettingsResponse {
    SettingsResponse {
        bidding_enabled: s.bidding_enabled,
        bid_duration_hours: s.bid_duration_hours,
        offer_min_increment: s.offer_min_increment,
        min_salary: s.min_salary,
        max_salary: s.max_salary,
    }
}

fn ban_to_response(m: &banned_users::Model) -> BannedUserResponse {
    BannedUserResponse {
        user_id: m.user_id,
        reason: m.reason.clone(),
        banned_by: m.banned_by,
        created_at: m.created_at.to_string(),
    }
}

fn mapping_to_response(m: &ea_player_mappings::Model) -> PlayerMappingResponse {
    PlayerMappingResponse {
        id: m.id,
        ea_name: m.ea_name.clone(),
        player_id: m.player_id,
    }
}

/// Effective bidding settings
pub async fn get_settings(state: &AppState) -> ApiResult<SettingsResponse> {
    let settings = settings_service::load_bidding_settings(state).await?;
    Ok(settings_to_response(&settings))
}

/// Apply any subset of bidding settings and return the new effective values
pub async fn update_settings(
    state: &AppState,
    request: UpdateSettingsRequest,
) -> ApiResult<SettingsResponse> {
    let repo = &state.repositories.settings;

    if let Some(enabled) = request.bidding_enabled {
        repo.upsert("bidding_enabled", if enabled { "true" } else { "false" })
            .await?;
    }
    if let Some(hours) = request.bid_duration_hours {
        if hours <= 0 {
            return Err(ApiError::Validation(
                "bid_duration_hours must be positive".to_string(),
            ));
        }
        repo.upsert("bid_duration_hours", &hours.to_string()).await?;
    }
    if let Some(increment) = request.offer_min_increment {
        if increment <= 0 {
            return Err(ApiError::Validation(
                "offer_min_increment must be positive".to_string(),
            ));
        }
        repo.upsert("offer_min_increment", &increment.to_string())
            .await?;
    }
    if let Some(min_salary) = request.min_salary {
        repo.upsert("min_salary", &min_salary.to_string()).await?;
    }
    if let Some(max_salary) = request.max_salary {
        repo.upsert("max_salary", &max_salary.to_string()).await?;
    }

    let settings = settings_service::load_bidding_settings(state).await?;
    Ok(settings_to_response(&settings))
}

/// All current bans
pub async fn list_banned_users(state: &AppState) -> ApiResult<BannedUsersListResponse> {
    let bans = state.repositories.banned_users.find_all().await?;

    let responses: Vec<BannedUserResponse> = bans.iter().map(ban_to_response).collect();

    Ok(BannedUsersListResponse {
        total: responses.len(),
        banned_users: responses,
    })
}

/// Ban a user from the league surfaces
pub async fn ban_user(
    state: &AppState,
    admin: &users::Model,
    user_id: Uuid,
    reason: Option<&str>,
) -> ApiResult<BanResponse> {
    if user_id == admin.id {
        return Err(ApiError::Validation("cannot ban yourself".to_string()));
    }

    state
        .repositories
        .users
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("user {} not found", user_id)))?;

    state
        .repositories
        .banned_users
        .ban(user_id, reason, admin.id)
        .await?;

    Ok(BanResponse {
        success: true,
        message: format!("user {} banned", user_id),
    })
}

/// Lift a ban
pub async fn unban_user(state: &AppState, user_id: Uuid) -> ApiResult<BanResponse> {
    if !state.repositories.banned_users.unban(user_id).await? {
        return Err(ApiError::NotFound(format!("user {} is not banned", user_id)));
    }

    Ok(BanResponse {
        success: true,
        message: format!("user {} unbanned", user_id),
    })
}

/// Toggle whether a club may sign players
pub async fn set_club_availability(
    state: &AppState,
    club_id: i64,
    available: bool,
) -> ApiResult<AvailabilityResponse> {
    if !state
        .repositories
        .clubs
        .set_availability(club_id, available)
        .await?
    {
        return Err(ApiError::NotFound(format!("club {} not found", club_id)));
    }

    Ok(AvailabilityResponse { club_id, available })
}

/// All EA roster-name mappings
pub async fn list_player_mappings(state: &AppState) -> ApiResult<PlayerMappingsListResponse> {
    let mappings = state.repositories.player_mappings.find_all().await?;

    let responses: Vec<PlayerMappingResponse> = mappings.iter().map(mapping_to_response).collect();

    Ok(PlayerMappingsListResponse {
        total: responses.len(),
        mappings: responses,
    })
}

/// Insert or repoint a mapping, returning the refreshed list
pub async fn upsert_player_mapping(
    state: &AppState,
    ea_name: &str,
    player_id: i64,
) -> ApiResult<PlayerMappingsListResponse> {
    if ea_name.trim().is_empty() {
        return Err(ApiError::Validation("ea_name must not be empty".to_string()));
    }

    state
        .repositories
        .players
        .get_by_id(player_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("player {} not found", player_id)))?;

    state
        .repositories
        .player_mappings
        .upsert(ea_name.trim(), player_id)
        .await?;

    list_player_mappings(state).await
}
