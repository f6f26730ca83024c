// Repository for user lookups and role checks

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::db::DbError;
use crate::entity::users;

#[derive(Clone, Debug)]
pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get user by auth-platform id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<users::Model>, DbError> {
        let result = users::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(result)
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
