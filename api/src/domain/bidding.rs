// Bidding rules for the free-agency market.
//
// Everything here is pure: callers fetch the open offers and club totals,
// these functions decide. The same ordering is used by the settlement
// worker when it picks a winner, so the two must not drift apart:
// amount descending, then created_at ascending, then id ascending.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::entity::offers;

/// Minimal view of an open offer used for rule evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOffer {
    pub id: i64,
    pub player_id: i64,
    pub club_id: i64,
    pub amount: i64,
    pub created_at: NaiveDateTime,
}

impl From<&offers::Model> for OpenOffer {
    fn from(m: &offers::Model) -> Self {
        OpenOffer {
            id: m.id,
            player_id: m.player_id,
            club_id: m.club_id,
            amount: m.amount,
            created_at: m.created_at,
        }
    }
}

/// Ranking order between two offers for the same player.
/// `Ordering::Less` means `a` ranks ahead of `b`.
pub fn winner_order(a: &OpenOffer, b: &OpenOffer) -> Ordering {
    b.amount
        .cmp(&a.amount)
        .then(a.created_at.cmp(&b.created_at))
        .then(a.id.cmp(&b.id))
}

/// The current highest offer among a player's open offers
pub fn current_highest(offers: &[OpenOffer]) -> Option<&OpenOffer> {
    offers.iter().min_by(|a, b| winner_order(a, b))
}

/// Per-player leading offers across a mixed set of open offers
pub fn winning_offers(offers: &[OpenOffer]) -> Vec<&OpenOffer> {
    let mut best: HashMap<i64, &OpenOffer> = HashMap::new();
    for offer in offers {
        let entry = best.entry(offer.player_id).or_insert(offer);
        if winner_order(offer, entry) == Ordering::Less {
            *entry = offer;
        }
    }
    best.into_values().collect()
}

/// Amounts of the offers by `club_id` that currently lead their player's
/// auction, excluding `exclude_player` (the player a new offer targets).
pub fn winning_amounts_for_club(
    offers: &[OpenOffer],
    club_id: i64,
    exclude_player: Option<i64>,
) -> Vec<i64> {
    winning_offers(offers)
        .into_iter()
        .filter(|o| o.club_id == club_id && Some(o.player_id) != exclude_player)
        .map(|o| o.amount)
        .collect()
}

/// Roster spend the club would carry if this offer ends up winning
pub fn cap_projection(roster_salary: i64, other_winning_offers: &[i64], amount: i64) -> i64 {
    roster_salary + other_winning_offers.iter().sum::<i64>() + amount
}

/// What an accepted submission should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionDecision {
    /// Insert a fresh open offer
    NewOffer,
    /// The caller already leads; restart the timer on its standing offer
    Extension { offer_id: i64 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BidRejection {
    #[error("offer is below the league minimum salary of {0}")]
    BelowMinimumSalary(i64),
    #[error("offer exceeds the league maximum salary of {0}")]
    AboveMaximumSalary(i64),
    #[error("offer must be at least {0} to beat the current highest")]
    BelowRequiredIncrement(i64),
    #[error("offer would lower your standing offer of {0}")]
    LowersStandingOffer(i64),
}

/// Decide whether a submission is acceptable against the player's open
/// offers. A club that already holds the highest offer may re-submit at
/// the same or a higher amount to extend its timer; everyone else must
/// clear the current highest by the configured increment.
pub fn evaluate_submission(
    open_offers: &[OpenOffer],
    club_id: i64,
    amount: i64,
    min_increment: i64,
    min_salary: i64,
    max_salary: i64,
) -> Result<SubmissionDecision, BidRejection> {
    if amount < min_salary {
        return Err(BidRejection::BelowMinimumSalary(min_salary));
    }
    if max_salary > 0 && amount > max_salary {
        return Err(BidRejection::AboveMaximumSalary(max_salary));
    }

    match current_highest(open_offers) {
        None => Ok(SubmissionDecision::NewOffer),
        Some(highest) if highest.club_id == club_id => {
            if amount >= highest.amount {
                Ok(SubmissionDecision::Extension {
                    offer_id: highest.id,
                })
            } else {
                Err(BidRejection::LowersStandingOffer(highest.amount))
            }
        }
        Some(highest) => {
            let required = highest.amount + min_increment;
            if amount < required {
                Err(BidRejection::BelowRequiredIncrement(required))
            } else {
                Ok(SubmissionDecision::NewOffer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const MIN_INCREMENT: i64 = 250_000;
    const MIN_SALARY: i64 = 500_000;
    const MAX_SALARY: i64 = 20_000_000;

    fn ts(secs: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, secs)
            .unwrap()
    }

    fn offer(id: i64, player_id: i64, club_id: i64, amount: i64, secs: u32) -> OpenOffer {
        OpenOffer {
            id,
            player_id,
            club_id,
            amount,
            created_at: ts(secs),
        }
    }

    #[test]
    fn first_offer_needs_only_the_minimum_salary() {
        let decision =
            evaluate_submission(&[], 1, MIN_SALARY, MIN_INCREMENT, MIN_SALARY, MAX_SALARY);
        assert_eq!(decision, Ok(SubmissionDecision::NewOffer));

        let rejected = evaluate_submission(
            &[],
            1,
            MIN_SALARY - 1,
            MIN_INCREMENT,
            MIN_SALARY,
            MAX_SALARY,
        );
        assert_eq!(rejected, Err(BidRejection::BelowMinimumSalary(MIN_SALARY)));
    }

    #[test]
    fn offers_below_the_increment_are_rejected() {
        let open = vec![offer(1, 10, 1, 5_000_000, 0)];

        // 5,000,000 standing: anything under 5,250,000 from a rival fails
        let rejected = evaluate_submission(
            &open,
            2,
            5_100_000,
            MIN_INCREMENT,
            MIN_SALARY,
            MAX_SALARY,
        );
        assert_eq!(
            rejected,
            Err(BidRejection::BelowRequiredIncrement(5_250_000))
        );

        let accepted = evaluate_submission(
            &open,
            2,
            5_250_000,
            MIN_INCREMENT,
            MIN_SALARY,
            MAX_SALARY,
        );
        assert_eq!(accepted, Ok(SubmissionDecision::NewOffer));
    }

    #[test]
    fn amounts_above_the_maximum_salary_are_rejected() {
        let rejected = evaluate_submission(
            &[],
            1,
            MAX_SALARY + 1,
            MIN_INCREMENT,
            MIN_SALARY,
            MAX_SALARY,
        );
        assert_eq!(rejected, Err(BidRejection::AboveMaximumSalary(MAX_SALARY)));
    }

    #[test]
    fn leading_club_may_extend_without_the_increment() {
        let open = vec![
            offer(1, 10, 1, 5_000_000, 0),
            offer(2, 10, 2, 4_000_000, 1),
        ];

        // Same amount from the leader restarts the timer
        let decision =
            evaluate_submission(&open, 1, 5_000_000, MIN_INCREMENT, MIN_SALARY, MAX_SALARY);
        assert_eq!(decision, Ok(SubmissionDecision::Extension { offer_id: 1 }));

        // A raise from the leader is an extension too
        let decision =
            evaluate_submission(&open, 1, 5_500_000, MIN_INCREMENT, MIN_SALARY, MAX_SALARY);
        assert_eq!(decision, Ok(SubmissionDecision::Extension { offer_id: 1 }));

        // But the leader cannot shrink its standing offer
        let rejected =
            evaluate_submission(&open, 1, 4_500_000, MIN_INCREMENT, MIN_SALARY, MAX_SALARY);
        assert_eq!(rejected, Err(BidRejection::LowersStandingOffer(5_000_000)));
    }

    #[test]
    fn highest_amount_is_always_current() {
        let open = vec![
            offer(1, 10, 1, 5_000_000, 0),
            offer(2, 10, 2, 7_000_000, 1),
            offer(3, 10, 3, 6_000_000, 2),
        ];
        let highest = current_highest(&open).unwrap();
        assert_eq!(highest.id, 2);
        assert_eq!(highest.amount, 7_000_000);
    }

    #[test]
    fn equal_amounts_break_ties_by_earliest_then_id() {
        let open = vec![
            offer(5, 10, 1, 7_000_000, 3),
            offer(4, 10, 2, 7_000_000, 1),
            offer(6, 10, 3, 7_000_000, 1),
        ];
        // Same amount: earliest created_at wins; same timestamp: lowest id
        let highest = current_highest(&open).unwrap();
        assert_eq!(highest.id, 4);
    }

    #[test]
    fn cap_projection_counts_other_winning_offers() {
        let open = vec![
            // Club 1 leads for players 10 and 11, trails for 12
            offer(1, 10, 1, 3_000_000, 0),
            offer(2, 11, 1, 2_000_000, 0),
            offer(3, 12, 1, 1_000_000, 0),
            offer(4, 12, 2, 4_000_000, 1),
        ];

        let winning = winning_amounts_for_club(&open, 1, None);
        assert_eq!(winning.iter().sum::<i64>(), 5_000_000);

        // Excluding the target player drops its standing amount from the projection
        let winning = winning_amounts_for_club(&open, 1, Some(10));
        assert_eq!(winning.iter().sum::<i64>(), 2_000_000);

        let projected = cap_projection(40_000_000, &winning, 6_000_000);
        assert_eq!(projected, 48_000_000);
    }
}
