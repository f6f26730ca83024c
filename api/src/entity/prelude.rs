//! Prelude module for convenient imports

pub use super::banned_users::Entity as BannedUsers;
pub use super::clubs::Entity as Clubs;
pub use super::ea_player_mappings::Entity as EaPlayerMappings;
pub use super::notifications::Entity as Notifications;
pub use super::offers::Entity as Offers;
pub use super::players::Entity as Players;
pub use super::system_settings::Entity as SystemSettings;
pub use super::users::Entity as Users;
