// Repository for notification rows

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::db::DbError;
use crate::entity::notifications;

#[derive(Clone, Debug)]
pub struct NotificationRepository {
    conn: DatabaseConnection,
}

impl NotificationRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a notification row for a user
    pub async fn insert(&self, user_id: Uuid, kind: &str, message: &str) -> Result<(), DbError> {
        let notification = notifications::ActiveModel {
            user_id: Set(user_id),
            kind: Set(kind.to_string()),
            message: Set(message.to_string()),
            read: Set(false),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        notification.insert(&self.conn).await?;
        Ok(())
    }

    /// A user's notifications, newest first
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<notifications::Model>, DbError> {
        let results = notifications::Entity::find()
            .filter(notifications::Column::UserId.eq(user_id))
            .order_by_desc(notifications::Column::CreatedAt)
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Mark one of the user's notifications read.
    /// Returns false when the row does not exist or belongs to someone else.
    pub async fn mark_read(&self, id: i64, user_id: Uuid) -> Result<bool, DbError> {
        let result = notifications::Entity::update_many()
            .col_expr(notifications::Column::Read, Expr::value(true))
            .filter(notifications::Column::Id.eq(id))
            .filter(notifications::Column::UserId.eq(user_id))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected == 1)
    }
}
