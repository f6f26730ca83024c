use chrono::NaiveDateTime;

use crate::infrastructure::persistence::entities::offers;

/// Minimal view of an offer used for winner selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferView {
    pub id: i64,
    pub player_id: i64,
    pub club_id: i64,
    pub amount: i64,
    pub created_at: NaiveDateTime,
}

impl From<&offers::Model> for OfferView {
    fn from(m: &offers::Model) -> Self {
        OfferView {
            id: m.id,
            player_id: m.player_id,
            club_id: m.club_id,
            amount: m.amount,
            created_at: m.created_at,
        }
    }
}

/// What happened to one claimed expired offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettlementOutcome {
    /// The offer won: the player moved to the offering club
    Settled {
        player_id: i64,
        club_id: i64,
        amount: i64,
    },
    /// The offer had been superseded and closed as lost
    Lost,
    /// Another worker instance claimed the offer first
    Skipped,
    /// Referenced player or club vanished; offer cancelled
    Voided,
}
