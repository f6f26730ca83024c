use crate::infrastructure::persistence::repositories::{
    ClubRepository, NotificationRepository, OfferRepository, PlayerRepository, UserRepository,
};
use crate::infrastructure::persistence::DbPool;

/// Repositories used by the settlement worker
pub struct Repositories {
    pub clubs: ClubRepository,
    pub notifications: NotificationRepository,
    pub offers: OfferRepository,
    pub players: PlayerRepository,
    pub users: UserRepository,
}

/// Creates repository instances from a connection pool
pub struct RepositoryFactory;

impl RepositoryFactory {
    pub fn create_repositories(db_pool: &DbPool) -> Repositories {
        let conn = db_pool.get_connection().clone();

        Repositories {
            clubs: ClubRepository::new(conn.clone()),
            notifications: NotificationRepository::new(conn.clone()),
            offers: OfferRepository::new(conn.clone()),
            players: PlayerRepository::new(conn.clone()),
            users: UserRepository::new(conn),
        }
    }
}
