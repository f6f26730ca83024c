// Repository for the banned_users table

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::db::DbError;
use crate::entity::banned_users;

#[derive(Clone, Debug)]
pub struct BannedUserRepository {
    conn: DatabaseConnection,
}

impl BannedUserRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Whether a user is currently banned
    pub async fn is_banned(&self, user_id: Uuid) -> Result<bool, DbError> {
        let result = banned_users::Entity::find_by_id(user_id)
            .one(&self.conn)
            .await?;
        Ok(result.is_some())
    }

    /// All bans, newest first
    pub async fn find_all(&self) -> Result<Vec<banned_users::Model>, DbError> {
        let results = banned_users::Entity::find()
            .order_by_desc(banned_users::Column::CreatedAt)
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Ban a user; re-banning updates the recorded reason
    pub async fn ban(
        &self,
        user_id: Uuid,
        reason: Option<&str>,
        banned_by: Uuid,
    ) -> Result<(), DbError> {
        let row = banned_users::ActiveModel {
            user_id: Set(user_id),
            reason: Set(reason.map(|r| r.to_string())),
            banned_by: Set(Some(banned_by)),
            created_at: Set(Utc::now().naive_utc()),
        };

        banned_users::Entity::insert(row)
            .on_conflict(
                OnConflict::column(banned_users::Column::UserId)
                    .update_columns([
                        banned_users::Column::Reason,
                        banned_users::Column::BannedBy,
                    ])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    /// Lift a ban. Returns false when the user was not banned.
    pub async fn unban(&self, user_id: Uuid) -> Result<bool, DbError> {
        let result = banned_users::Entity::delete_by_id(user_id)
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected == 1)
    }
}
