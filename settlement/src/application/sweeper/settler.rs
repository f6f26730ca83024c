// Settles a single claimed expired offer.
//
// Claim first, then decide, then write. The claim (open -> settling) is a
// conditional update, so a second worker sweeping the same offer sees
// zero rows affected and skips it. The settlement itself runs in one
// transaction; notifications go out after commit and never unwind it.

use crate::domain::errors::SettlementError;
use crate::domain::models::{OfferView, SettlementOutcome};
use crate::domain::services::settlement_service::ClaimDecision;
use crate::domain::services::SettlementService;
use crate::infrastructure::persistence::entities::{clubs, offers, players};
use crate::infrastructure::persistence::repositories::{
    ClubRepository, NotificationRepository, OfferRepository, PlayerRepository, UserRepository,
};
use crate::utils::logging;

pub struct OfferSettler {
    offer_repository: OfferRepository,
    player_repository: PlayerRepository,
    club_repository: ClubRepository,
    user_repository: UserRepository,
    notification_repository: NotificationRepository,
}

impl OfferSettler {
    pub fn new(
        offer_repository: OfferRepository,
        player_repository: PlayerRepository,
        club_repository: ClubRepository,
        user_repository: UserRepository,
        notification_repository: NotificationRepository,
    ) -> Self {
        Self {
            offer_repository,
            player_repository,
            club_repository,
            user_repository,
            notification_repository,
        }
    }

    /// Claim and resolve one expired offer
    pub async fn settle_expired(
        &self,
        expired: &offers::Model,
    ) -> Result<SettlementOutcome, SettlementError> {
        if !self.offer_repository.claim(expired.id).await? {
            return Ok(SettlementOutcome::Skipped);
        }

        match self.resolve_claim(expired).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                // Give the offer back to a later sweep rather than
                // leaving it stuck in settling
                if let Err(release_err) = self.offer_repository.release(expired.id).await {
                    logging::log_error(&format!(
                        "Failed to release claim on offer {}: {}",
                        expired.id, release_err
                    ));
                }
                Err(e)
            }
        }
    }

    async fn resolve_claim(
        &self,
        expired: &offers::Model,
    ) -> Result<SettlementOutcome, SettlementError> {
        let player = self.player_repository.get_by_id(expired.player_id).await?;
        let club = self.club_repository.get_by_id(expired.club_id).await?;

        let (player, club) = match (player, club) {
            (Some(player), Some(club)) => (player, club),
            _ => {
                logging::log_warning(&format!(
                    "Offer {} references a missing player or club, voiding",
                    expired.id
                ));
                self.offer_repository.void(expired.id).await?;
                return Ok(SettlementOutcome::Voided);
            }
        };

        let rival_models = self
            .offer_repository
            .find_open_by_player(expired.player_id)
            .await?;
        let rivals: Vec<OfferView> = rival_models.iter().map(Into::into).collect();
        let claimed = OfferView::from(expired);

        match SettlementService::decide_claim(&claimed, &rivals) {
            ClaimDecision::CloseLost { leader_id } => {
                logging::log_info(&format!(
                    "Offer {} for player {} expired behind offer {}, closing as lost",
                    expired.id, player.id, leader_id
                ));
                self.offer_repository.close_lost(expired.id).await?;
                Ok(SettlementOutcome::Lost)
            }
            ClaimDecision::Settle => {
                self.offer_repository
                    .settle_claimed(expired.id, player.id, club.id, expired.amount)
                    .await
                    .map_err(|e| SettlementError::TransactionError(e.to_string()))?;

                logging::log_info(&format!(
                    "Player {} signed with club {} for {} (offer {})",
                    player.id, club.id, expired.amount, expired.id
                ));

                self.notify_settlement(&player, &club, expired.amount, &rivals)
                    .await;

                Ok(SettlementOutcome::Settled {
                    player_id: player.id,
                    club_id: club.id,
                    amount: expired.amount,
                })
            }
        }
    }

    /// Best-effort notifications after a committed settlement. Failures
    /// are logged and swallowed; the roster move already happened.
    async fn notify_settlement(
        &self,
        player: &players::Model,
        winning_club: &clubs::Model,
        amount: i64,
        rivals: &[OfferView],
    ) {
        if let Some(user_id) = player.user_id {
            let message = format!("You signed with {} for {}", winning_club.name, amount);
            if let Err(e) = self
                .notification_repository
                .insert(user_id, "player_signed", &message)
                .await
            {
                logging::log_warning(&format!(
                    "Failed to insert player_signed notification: {}",
                    e
                ));
            }
        }

        let message = format!("{} signed with your club for {}", player.name, amount);
        self.notify_club_managers(winning_club.id, "player_signed", &message)
            .await;

        let mut losing_clubs: Vec<i64> = rivals
            .iter()
            .map(|r| r.club_id)
            .filter(|&c| c != winning_club.id)
            .collect();
        losing_clubs.sort_unstable();
        losing_clubs.dedup();

        for club_id in losing_clubs {
            let message = format!("{} signed with {} instead", player.name, winning_club.name);
            self.notify_club_managers(club_id, "offer_lost", &message)
                .await;
        }
    }

    async fn notify_club_managers(&self, club_id: i64, kind: &str, message: &str) {
        let managers = match self.user_repository.find_managers_by_club(club_id).await {
            Ok(managers) => managers,
            Err(e) => {
                logging::log_warning(&format!(
                    "Failed to load managers for club {}: {}",
                    club_id, e
                ));
                return;
            }
        };

        for manager in managers {
            if let Err(e) = self
                .notification_repository
                .insert(manager.id, kind, message)
                .await
            {
                logging::log_warning(&format!("Failed to insert {} notification: {}", kind, e));
            }
        }
    }
}
