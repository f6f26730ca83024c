use proleague_settlement::application::sweeper::{OfferSettler, SweepProcessor, SweepStatus};
use proleague_settlement::config::WorkerConfig;
use proleague_settlement::domain::models::OfferView;
use proleague_settlement::domain::services::settlement_service::ClaimDecision;
use proleague_settlement::domain::services::SettlementService;
use proleague_settlement::infrastructure::persistence::{DbPool, RepositoryFactory};

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tokio::sync::Mutex;

fn ts(secs: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(15, 0, secs)
        .unwrap()
}

fn offer(id: i64, player_id: i64, club_id: i64, amount: i64, secs: u32) -> OfferView {
    OfferView {
        id,
        player_id,
        club_id,
        amount,
        created_at: ts(secs),
    }
}

#[test]
fn test_winner_selection_prefers_highest_amount() {
    // Team A offers 5,000,000; Team B comes in at 7,000,000 within the
    // window. Team B must be current from then on.
    let team_a = offer(1, 10, 1, 5_000_000, 0);
    let team_b = offer(2, 10, 2, 7_000_000, 30);

    let offers = [team_a.clone(), team_b.clone()];
    let highest = SettlementService::current_highest(&offers).unwrap();
    assert_eq!(highest.id, team_b.id);
    assert_eq!(highest.amount, 7_000_000);

    // When Team A's offer expires it closes as lost, not settled
    assert_eq!(
        SettlementService::decide_claim(&team_a, &[team_b]),
        ClaimDecision::CloseLost { leader_id: 2 }
    );
}

#[test]
fn test_uncontested_expired_offer_settles() {
    // A single offer a minute past expiry with no rivals settles the player
    let claimed = offer(1, 10, 1, 5_000_000, 0);
    assert_eq!(
        SettlementService::decide_claim(&claimed, &[]),
        ClaimDecision::Settle
    );
}

#[test]
fn test_equal_amounts_resolve_deterministically() {
    let first = offer(1, 10, 1, 7_000_000, 0);
    let second = offer(2, 10, 2, 7_000_000, 10);

    // Whichever way the slices are ordered, the earliest offer wins
    let offers = [second.clone(), first.clone()];
    let highest = SettlementService::current_highest(&offers).unwrap();
    assert_eq!(highest.id, first.id);

    assert_eq!(
        SettlementService::decide_claim(&second, &[first]),
        ClaimDecision::CloseLost { leader_id: 1 }
    );
}

#[tokio::test]
#[ignore] // Run with: cargo test test_sweep_against_live_database -- --ignored
async fn test_sweep_against_live_database() {
    // Requires DATABASE_URL pointing at a migrated database
    let config = WorkerConfig::from_env();

    let db_pool = match DbPool::new(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            println!("Failed to connect to database: {}", e);
            return;
        }
    };

    let repositories = RepositoryFactory::create_repositories(&db_pool);
    let status = Arc::new(Mutex::new(SweepStatus::default()));

    let settler = OfferSettler::new(
        repositories.offers.clone(),
        repositories.players,
        repositories.clubs,
        repositories.users,
        repositories.notifications,
    );
    let processor = SweepProcessor::new(settler, repositories.offers, config, status.clone());

    // A sweep over whatever is expired must complete without error and
    // account for every offer it examined
    match processor.run_sweep().await {
        Ok(summary) => {
            println!(
                "Sweep examined {} offers: {:?}",
                summary.examined, summary
            );
            assert_eq!(
                summary.examined,
                summary.settled + summary.lost + summary.skipped + summary.voided + summary.errors
            );

            let status = status.lock().await;
            assert_eq!(status.sweeps_completed, 1);
            assert!(status.last_sweep_at.is_some());
        }
        Err(e) => {
            panic!("Sweep failed: {}", e);
        }
    }
}

#[tokio::test]
#[ignore] // Run with: cargo test test_claim_on_missing_offer -- --ignored
async fn test_claim_on_missing_offer() {
    let config = WorkerConfig::from_env();

    let db_pool = match DbPool::new(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            println!("Failed to connect to database: {}", e);
            return;
        }
    };

    let repositories = RepositoryFactory::create_repositories(&db_pool);

    // Claiming an id that does not exist must report no rows claimed
    let claimed = repositories
        .offers
        .claim(i64::MAX)
        .await
        .expect("claim query failed");
    assert!(!claimed);
}
