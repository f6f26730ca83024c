use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::infrastructure::persistence::entities::users;
use crate::infrastructure::persistence::error::DbError;

/// Repository for user lookups
#[derive(Clone)]
pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Managers attached to a club (notification targets)
    pub async fn find_managers_by_club(&self, club_id: i64) -> Result<Vec<users::Model>, DbError> {
        let results = users::Entity::find()
            .filter(users::Column::ClubId.eq(club_id))
            .filter(users::Column::Role.eq("manager"))
            .all(&self.conn)
            .await?;
        Ok(results)
    }
}
