// Repository for offer queries and writes

use chrono::{NaiveDateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::DbError;
use crate::entity::offers;

#[derive(Clone, Debug)]
pub struct OfferRepository {
    conn: DatabaseConnection,
}

impl OfferRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get offer by id
    pub async fn get_by_id(&self, id: i64) -> Result<Option<offers::Model>, DbError> {
        let result = offers::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(result)
    }

    /// All open offers, optionally filtered by player and/or club,
    /// ranked highest first
    pub async fn find_open(
        &self,
        player_id: Option<i64>,
        club_id: Option<i64>,
    ) -> Result<Vec<offers::Model>, DbError> {
        let mut query = offers::Entity::find().filter(offers::Column::Status.eq("open"));

        if let Some(p) = player_id {
            query = query.filter(offers::Column::PlayerId.eq(p));
        }
        if let Some(c) = club_id {
            query = query.filter(offers::Column::ClubId.eq(c));
        }

        let results = query
            .order_by_desc(offers::Column::Amount)
            .order_by_asc(offers::Column::CreatedAt)
            .order_by_asc(offers::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Open offers for a single player, ranked highest first
    pub async fn find_open_by_player(&self, player_id: i64) -> Result<Vec<offers::Model>, DbError> {
        self.find_open(Some(player_id), None).await
    }

    /// Open offers across a set of players (cap projection input)
    pub async fn find_open_by_players(
        &self,
        player_ids: &[i64],
    ) -> Result<Vec<offers::Model>, DbError> {
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }
        let results = offers::Entity::find()
            .filter(offers::Column::Status.eq("open"))
            .filter(offers::Column::PlayerId.is_in(player_ids.to_vec()))
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Open offers submitted by a club
    pub async fn find_open_by_club(&self, club_id: i64) -> Result<Vec<offers::Model>, DbError> {
        self.find_open(None, Some(club_id)).await
    }

    /// All offers for a player regardless of status, newest first
    pub async fn find_by_player(&self, player_id: i64) -> Result<Vec<offers::Model>, DbError> {
        let results = offers::Entity::find()
            .filter(offers::Column::PlayerId.eq(player_id))
            .order_by_desc(offers::Column::CreatedAt)
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Insert a fresh open offer
    pub async fn insert_offer(
        &self,
        player_id: i64,
        club_id: i64,
        amount: i64,
        expires_at: NaiveDateTime,
    ) -> Result<offers::Model, DbError> {
        let offer = offers::ActiveModel {
            player_id: Set(player_id),
            club_id: Set(club_id),
            amount: Set(amount),
            status: Set("open".to_string()),
            created_at: Set(Utc::now().naive_utc()),
            expires_at: Set(expires_at),
            ..Default::default()
        };

        let inserted = offer.insert(&self.conn).await?;
        Ok(inserted)
    }

    /// Restart the timer on a standing offer, raising the amount if needed
    pub async fn extend_offer(
        &self,
        id: i64,
        amount: i64,
        expires_at: NaiveDateTime,
    ) -> Result<offers::Model, DbError> {
        let offer = offers::ActiveModel {
            id: Set(id),
            amount: Set(amount),
            expires_at: Set(expires_at),
            ..Default::default()
        };

        let updated = offer.update(&self.conn).await?;
        Ok(updated)
    }

    /// Conditionally cancel an offer while it is still open.
    /// Returns false when the offer was already claimed or closed.
    pub async fn cancel_if_open(&self, id: i64) -> Result<bool, DbError> {
        let result = offers::Entity::update_many()
            .col_expr(offers::Column::Status, Expr::value("cancelled"))
            .filter(offers::Column::Id.eq(id))
            .filter(offers::Column::Status.eq("open"))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected == 1)
    }
}
