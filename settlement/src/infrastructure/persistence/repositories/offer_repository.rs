// Offer queries and the settlement state transitions.
//
// Status moves are always conditional on the current status, so two
// worker instances sweeping at once cannot settle the same offer twice.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::infrastructure::persistence::entities::{offers, players};
use crate::infrastructure::persistence::error::DbError;

/// Repository for offer rows
#[derive(Clone)]
pub struct OfferRepository {
    conn: DatabaseConnection,
}

impl OfferRepository {
    /// Create a new OfferRepository
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Open offers whose expiry has passed, oldest expiry first
    pub async fn find_expired_open(&self) -> Result<Vec<offers::Model>, DbError> {
        let results = offers::Entity::find()
            .filter(offers::Column::Status.eq("open"))
            .filter(offers::Column::ExpiresAt.lte(Utc::now().naive_utc()))
            .order_by_asc(offers::Column::ExpiresAt)
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// The player's remaining open offers (a claimed offer is already
    /// out of `open` and does not appear here)
    pub async fn find_open_by_player(&self, player_id: i64) -> Result<Vec<offers::Model>, DbError> {
        let results = offers::Entity::find()
            .filter(offers::Column::Status.eq("open"))
            .filter(offers::Column::PlayerId.eq(player_id))
            .all(&self.conn)
            .await?;
        Ok(results)
    }

    /// Claim an expired offer for settlement (open -> settling).
    /// Returns false when another worker instance claimed it first.
    pub async fn claim(&self, id: i64) -> Result<bool, DbError> {
        let result = offers::Entity::update_many()
            .col_expr(offers::Column::Status, Expr::value("settling"))
            .filter(offers::Column::Id.eq(id))
            .filter(offers::Column::Status.eq("open"))
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected == 1)
    }

    /// Release a claim after a failed settlement (settling -> open)
    pub async fn release(&self, id: i64) -> Result<(), DbError> {
        offers::Entity::update_many()
            .col_expr(offers::Column::Status, Expr::value("open"))
            .filter(offers::Column::Id.eq(id))
            .filter(offers::Column::Status.eq("settling"))
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    /// Close a superseded claimed offer (settling -> lost)
    pub async fn close_lost(&self, id: i64) -> Result<(), DbError> {
        offers::Entity::update_many()
            .col_expr(offers::Column::Status, Expr::value("lost"))
            .filter(offers::Column::Id.eq(id))
            .filter(offers::Column::Status.eq("settling"))
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    /// Void a claimed offer whose player or club row vanished
    /// (settling -> cancelled)
    pub async fn void(&self, id: i64) -> Result<(), DbError> {
        offers::Entity::update_many()
            .col_expr(offers::Column::Status, Expr::value("cancelled"))
            .filter(offers::Column::Id.eq(id))
            .filter(offers::Column::Status.eq("settling"))
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    /// Settle a claimed offer in one transaction: move the player to the
    /// winning club at the offered salary, mark the claimed offer settled,
    /// and close every remaining open offer for the player as lost.
    pub async fn settle_claimed(
        &self,
        claimed_id: i64,
        player_id: i64,
        club_id: i64,
        amount: i64,
    ) -> Result<(), DbError> {
        let now = Utc::now().naive_utc();
        let txn = self.conn.begin().await?;

        players::Entity::update_many()
            .col_expr(players::Column::ClubId, Expr::value(club_id))
            .col_expr(players::Column::Salary, Expr::value(amount))
            .col_expr(players::Column::UpdatedAt, Expr::value(now))
            .filter(players::Column::Id.eq(player_id))
            .exec(&txn)
            .await?;

        offers::Entity::update_many()
            .col_expr(offers::Column::Status, Expr::value("settled"))
            .col_expr(offers::Column::SettledAt, Expr::value(now))
            .filter(offers::Column::Id.eq(claimed_id))
            .filter(offers::Column::Status.eq("settling"))
            .exec(&txn)
            .await?;

        offers::Entity::update_many()
            .col_expr(offers::Column::Status, Expr::value("lost"))
            .filter(offers::Column::PlayerId.eq(player_id))
            .filter(offers::Column::Status.eq("open"))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}
