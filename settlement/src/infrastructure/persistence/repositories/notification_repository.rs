use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use crate::infrastructure::persistence::entities::notifications;
use crate::infrastructure::persistence::error::DbError;

/// Repository for notification rows
#[derive(Clone)]
pub struct NotificationRepository {
    conn: DatabaseConnection,
}

impl NotificationRepository {
    /// Create a new NotificationRepository
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
}
