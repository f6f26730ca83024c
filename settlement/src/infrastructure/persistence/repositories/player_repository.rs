use sea_orm::{DatabaseConnection, EntityTrait};

use crate::infrastructure::persistence::entities::players;
use crate::infrastructure::persistence::error::DbError;

/// Repository for player lookups
#[derive(Clone)]
pub struct PlayerRepository {
    conn: DatabaseConnection,
}

impl PlayerRepository {
    /// Create a new PlayerRepository
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get player by id
    pub async fn get_by_id(&self, id: i64) -> Result<Option<players::Model>, DbError> {
        let result = players::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(result)
    }
}
