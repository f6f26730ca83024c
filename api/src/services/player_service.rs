// Player service - roster and free-agent listings

use serde::Serialize;
use uuid::Uuid;

use crate::entity::players;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub club_id: Option<i64>,
    pub salary: i64,
    pub user_id: Option<Uuid>,
    pub free_agent: bool,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct PlayersListResponse {
    pub total: usize,
    pub players: Vec<PlayerResponse>,
}

fn model_to_response(m: &players::Model) -> PlayerResponse {
    PlayerResponse {
        id: m.id,
        name: m.name.clone(),
        position: m.position.clone(),
        club_id: m.club_id,
        salary: m.salary,
        user_id: m.user_id,
        free_agent: m.club_id.is_none(),
        created_at: m.created_at.to_string(),
    }
}

/// All players, optionally restricted to free agents
pub async fn get_players(state: &AppState, free_agents_only: bool) -> ApiResult<PlayersListResponse> {
    let players = state
        .repositories
        .players
        .find_all(free_agents_only)
        .await?;

    let responses: Vec<PlayerResponse> = players.iter().map(model_to_response).collect();

    Ok(PlayersListResponse {
        total: responses.len(),
        players: responses,
    })
}

/// A single player by id
pub async fn get_player(state: &AppState, id: i64) -> ApiResult<PlayerResponse> {
    let player = state
        .repositories
        .players
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("player {} not found", id)))?;

    Ok(model_to_response(&player))
}
