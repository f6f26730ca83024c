//! SeaORM Entity for the offers table

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub player_id: i64,
    pub club_id: i64,

    /// Offered salary in minor currency units
    pub amount: i64,

    /// Lifecycle state: open, settling, settled, lost, cancelled.
    /// The API only ever writes open and cancelled; the rest belong to
    /// the settlement worker.
    #[sea_orm(column_type = "Text")]
    pub status: String,

    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
    #[sea_orm(nullable)]
    pub settled_at: Option<NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
