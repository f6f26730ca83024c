// Database repository management

mod banned_user_repository;
mod club_repository;
mod notification_repository;
mod offer_repository;
mod player_mapping_repository;
mod player_repository;
mod settings_repository;
mod user_repository;

pub use banned_user_repository::BannedUserRepository;
pub use club_repository::ClubRepository;
pub use notification_repository::NotificationRepository;
pub use offer_repository::OfferRepository;
pub use player_mapping_repository::PlayerMappingRepository;
pub use player_repository::PlayerRepository;
pub use settings_repository::SettingsRepository;
pub use user_repository::UserRepository;

use sea_orm::DatabaseConnection;

/// Container for all database repositories
pub struct Repositories {
    pub banned_users: BannedUserRepository,
    pub clubs: ClubRepository,
    pub notifications: NotificationRepository,
    pub offers: OfferRepository,
    pub player_mappings: PlayerMappingRepository,
    pub players: PlayerRepository,
    pub settings: SettingsRepository,
    pub users: UserRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Repositories {
            banned_users: BannedUserRepository::new(conn.clone()),
            clubs: ClubRepository::new(conn.clone()),
            notifications: NotificationRepository::new(conn.clone()),
            offers: OfferRepository::new(conn.clone()),
            player_mappings: PlayerMappingRepository::new(conn.clone()),
            players: PlayerRepository::new(conn.clone()),
            settings: SettingsRepository::new(conn.clone()),
            users: UserRepository::new(conn),
        }
    }
}
