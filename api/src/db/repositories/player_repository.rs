// Repository for player queries and roster lookups

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::db::DbError;
use crate::entity::players;

#[derive(Clone, Debug)]
pub struct PlayerRepository {
    conn: DatabaseConnection,
}

impl PlayerRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get player by id
    pub async fn get_by_id(&self, id: i64) -> Result<Option<players::Model>, DbError> {
        let result = players::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(result)
    }

    /// All players, optionally restricted to free agents
    pub async fn find_all(&self, free_agents_only: bool) -> Result<Vec<players::Model>, DbError> {
        let mut query = players::Entity::find();

        if free_agents_only {
            query = query.filter(players::Column::ClubId.is_null());
        }

        let results = query
            .order_by_asc(players::Column::Name)
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Current roster of a club
    pub async fn find_by_club(&self, club_id: i64) -> Result<Vec<players::Model>, DbError> {
        let results = players::Entity::find()
            .filter(players::Column::ClubId.eq(club_id))
            .order_by_asc(players::Column::Name)
            .all(&self.conn)
            .await?;
        Ok(results)
    }
}
