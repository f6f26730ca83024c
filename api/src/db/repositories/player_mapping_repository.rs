// Repository for EA roster-name mappings

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::db::DbError;
use crate::entity::ea_player_mappings;

#[derive(Clone, Debug)]
pub struct PlayerMappingRepository {
    conn: DatabaseConnection,
}

impl PlayerMappingRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All mappings, alphabetical by in-game name
    pub async fn find_all(&self) -> Result<Vec<ea_player_mappings::Model>, DbError> {
        let results = ea_player_mappings::Entity::find()
            .order_by_asc(ea_player_mappings::Column::EaName)
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Insert or repoint a mapping from an in-game name to a league player
    pub async fn upsert(&self, ea_name: &str, player_id: i64) -> Result<(), DbError> {
        let row = ea_player_mappings::ActiveModel {
            ea_name: Set(ea_name.to_string()),
            player_id: Set(player_id),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        ea_player_mappings::Entity::insert(row)
            .on_conflict(
                OnConflict::column(ea_player_mappings::Column::EaName)
                    .update_column(ea_player_mappings::Column::PlayerId)
                    .to_owned(),
            )
            .exec(&self.conn)
            .await?;
        Ok(())
    }
}
