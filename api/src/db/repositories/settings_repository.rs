// Repository for system_settings key/value rows

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::db::DbError;
use crate::entity::system_settings;

#[derive(Clone, Debug)]
pub struct SettingsRepository {
    conn: DatabaseConnection,
}

impl SettingsRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All settings rows
    pub async fn get_all(&self) -> Result<Vec<system_settings::Model>, DbError> {
        let results = system_settings::Entity::find()
            .order_by_asc(system_settings::Column::Key)
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Insert or overwrite a setting
    pub async fn upsert(&self, key: &str, value: &str) -> Result<(), DbError> {
        let row = system_settings::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(Utc::now().naive_utc()),
        };

        system_settings::Entity::insert(row)
            .on_conflict(
                OnConflict::column(system_settings::Column::Key)
                    .update_columns([
                        system_settings::Column::Value,
                        system_settings::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await?;
        Ok(())
    }
}
