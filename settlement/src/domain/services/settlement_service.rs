// Winner selection for expired offers.
//
// Ranking must match the API's bidding rules exactly: amount descending,
// then created_at ascending, then id ascending. A claimed expired offer
// settles its player only while it still leads; otherwise it merely
// closes as lost and the player waits for the leading offer's own expiry.

use std::cmp::Ordering;

use crate::domain::models::OfferView;

/// What to do with a claimed expired offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimDecision {
    /// The claimed offer leads its player's auction: settle the player
    Settle,
    /// A rival open offer ranks ahead: close the claimed offer as lost
    CloseLost { leader_id: i64 },
}

/// Pure settlement decisions
pub struct SettlementService;

impl SettlementService {
    /// Ranking order between two offers for the same player.
    /// `Ordering::Less` means `a` ranks ahead of `b`.
    pub fn winner_order(a: &OfferView, b: &OfferView) -> Ordering {
        b.amount
            .cmp(&a.amount)
            .then(a.created_at.cmp(&b.created_at))
            .then(a.id.cmp(&b.id))
    }

    /// The leading offer among a set of open offers
    pub fn current_highest(offers: &[OfferView]) -> Option<&OfferView> {
        offers.iter().min_by(|a, b| Self::winner_order(a, b))
    }

    /// Decide whether a claimed expired offer settles its player.
    /// `rivals` are the player's remaining open offers.
    pub fn decide_claim(claimed: &OfferView, rivals: &[OfferView]) -> ClaimDecision {
        match Self::current_highest(rivals) {
            Some(leader) if Self::winner_order(leader, claimed) == Ordering::Less => {
                ClaimDecision::CloseLost {
                    leader_id: leader.id,
                }
            }
            _ => ClaimDecision::Settle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(secs: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, secs)
            .unwrap()
    }

    fn offer(id: i64, club_id: i64, amount: i64, secs: u32) -> OfferView {
        OfferView {
            id,
            player_id: 10,
            club_id,
            amount,
            created_at: ts(secs),
        }
    }

    #[test]
    fn sole_expired_offer_settles() {
        let claimed = offer(1, 1, 5_000_000, 0);
        assert_eq!(
            SettlementService::decide_claim(&claimed, &[]),
            ClaimDecision::Settle
        );
    }

    #[test]
    fn highest_expired_offer_settles_over_lower_rivals() {
        let claimed = offer(3, 3, 7_000_000, 2);
        let rivals = vec![offer(1, 1, 5_000_000, 0), offer(2, 2, 6_000_000, 1)];
        assert_eq!(
            SettlementService::decide_claim(&claimed, &rivals),
            ClaimDecision::Settle
        );
    }

    #[test]
    fn superseded_offer_closes_as_lost() {
        let claimed = offer(1, 1, 5_000_000, 0);
        let rivals = vec![offer(2, 2, 7_000_000, 1)];
        assert_eq!(
            SettlementService::decide_claim(&claimed, &rivals),
            ClaimDecision::CloseLost { leader_id: 2 }
        );
    }

    #[test]
    fn equal_amount_ties_go_to_the_earliest_offer() {
        // The claimed offer arrived first, so an equal rival does not beat it
        let claimed = offer(1, 1, 7_000_000, 0);
        let rivals = vec![offer(2, 2, 7_000_000, 5)];
        assert_eq!(
            SettlementService::decide_claim(&claimed, &rivals),
            ClaimDecision::Settle
        );

        // The rival arrived first: the claimed offer loses the tie
        let claimed = offer(3, 1, 7_000_000, 5);
        let rivals = vec![offer(2, 2, 7_000_000, 0)];
        assert_eq!(
            SettlementService::decide_claim(&claimed, &rivals),
            ClaimDecision::CloseLost { leader_id: 2 }
        );
    }

    #[test]
    fn identical_timestamps_fall_back_to_lowest_id() {
        let claimed = offer(4, 1, 7_000_000, 0);
        let rivals = vec![offer(2, 2, 7_000_000, 0)];
        assert_eq!(
            SettlementService::decide_claim(&claimed, &rivals),
            ClaimDecision::CloseLost { leader_id: 2 }
        );
    }

    #[test]
    fn current_highest_ranks_by_amount_first() {
        let offers = vec![
            offer(1, 1, 5_000_000, 0),
            offer(2, 2, 7_000_000, 3),
            offer(3, 3, 6_000_000, 1),
        ];
        assert_eq!(SettlementService::current_highest(&offers).unwrap().id, 2);
    }
}
