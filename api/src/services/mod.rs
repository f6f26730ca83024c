// Business logic service implementations

pub mod admin_service;
pub mod club_service;
pub mod notification_service;
pub mod offer_service;
pub mod player_service;
pub mod settings_service;
