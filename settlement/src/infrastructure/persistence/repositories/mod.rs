pub mod club_repository;
pub mod notification_repository;
pub mod offer_repository;
pub mod player_repository;
pub mod user_repository;

pub use club_repository::ClubRepository;
pub use notification_repository::NotificationRepository;
pub use offer_repository::OfferRepository;
pub use player_repository::PlayerRepository;
pub use user_repository::UserRepository;
