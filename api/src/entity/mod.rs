//! Entity module for database models

pub mod banned_users;
pub mod clubs;
pub mod ea_player_mappings;
pub mod notifications;
pub mod offers;
pub mod players;
pub mod prelude;
pub mod system_settings;
pub mod users;
