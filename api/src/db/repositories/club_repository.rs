// Repository for club queries

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::db::DbError;
use crate::entity::clubs;

#[derive(Clone, Debug)]
pub struct ClubRepository {
    conn: DatabaseConnection,
}

impl ClubRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get club by id
    pub async fn get_by_id(&self, id: i64) -> Result<Option<clubs::Model>, DbError> {
        let result = clubs::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(result)
    }

    /// All clubs, alphabetical
    pub async fn find_all(&self) -> Result<Vec<clubs::Model>, DbError> {
        let results = clubs::Entity::find()
            .order_by_asc(clubs::Column::Name)
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Toggle whether a club may sign players.
    /// Returns false when the club does not exist.
    pub async fn set_availability(&self, id: i64, available: bool) -> Result<bool, DbError> {
        let result = clubs::Entity::update_many()
            .col_expr(clubs::Column::Available, Expr::value(available))
            .filter(clubs::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected == 1)
    }
}
