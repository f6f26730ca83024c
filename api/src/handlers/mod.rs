// Handlers Module
// This module contains the API endpoint handlers

mod admin;
mod clubs;
mod health;
mod notifications;
mod offers;
mod players;

pub use admin::{
    ban_user, get_settings, list_banned_users, list_player_mappings, set_club_availability,
    unban_user, update_settings, upsert_player_mapping,
};
pub use clubs::{get_club, get_club_cap_space, get_clubs};
pub use health::health_check;
pub use notifications::{get_notifications, mark_notification_read};
pub use offers::{get_open_offers, submit_offer, withdraw_offer};
pub use players::{get_player, get_player_highest_offer, get_player_offers, get_players};

use std::sync::Arc;

use crate::db::Repositories;

/// Application state shared with all routes
#[derive(Clone)]
pub struct AppState {
    pub repositories: Arc<Repositories>,
}
