use sea_orm::{DatabaseConnection, EntityTrait};

use crate::infrastructure::persistence::entities::clubs;
use crate::infrastructure::persistence::error::DbError;

/// Repository for club lookups
#[derive(Clone)]
pub struct ClubRepository {
    conn: DatabaseConnection,
}

impl ClubRepository {
    /// Create a new ClubRepository
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get club by id
    pub async fn get_by_id(&self, id: i64) -> Result<Option<clubs::Model>, DbError> {
        let result = clubs::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(result)
    }
}
