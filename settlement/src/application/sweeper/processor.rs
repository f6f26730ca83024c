// The periodic sweep loop.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::application::sweeper::OfferSettler;
use crate::config::WorkerConfig;
use crate::domain::errors::SweepError;
use crate::domain::models::SettlementOutcome;
use crate::infrastructure::persistence::repositories::OfferRepository;
use crate::utils::logging;

/// Result of a single sweep pass
#[derive(Debug, Default, Clone, Serialize)]
pub struct SweepSummary {
    pub examined: u64,
    pub settled: u64,
    pub lost: u64,
    pub skipped: u64,
    pub voided: u64,
    pub errors: u64,
}

impl SweepSummary {
    fn record(&mut self, outcome: &SettlementOutcome) {
        match outcome {
            SettlementOutcome::Settled { .. } => self.settled += 1,
            SettlementOutcome::Lost => self.lost += 1,
            SettlementOutcome::Skipped => self.skipped += 1,
            SettlementOutcome::Voided => self.voided += 1,
        }
    }

    fn is_quiet(&self) -> bool {
        self.examined == 0
    }
}

/// Running totals exposed through the status API
#[derive(Debug, Default, Clone, Serialize)]
pub struct SweepStatus {
    pub sweeps_completed: u64,
    pub offers_settled: u64,
    pub offers_lost: u64,
    pub offers_skipped: u64,
    pub offers_voided: u64,
    pub sweep_errors: u64,
    pub last_sweep_at: Option<DateTime<Utc>>,
}

impl SweepStatus {
    fn apply(&mut self, summary: &SweepSummary) {
        self.sweeps_completed += 1;
        self.offers_settled += summary.settled;
        self.offers_lost += summary.lost;
        self.offers_skipped += summary.skipped;
        self.offers_voided += summary.voided;
        self.sweep_errors += summary.errors;
        self.last_sweep_at = Some(Utc::now());
    }
}

/// Periodic processor settling expired offers
pub struct SweepProcessor {
    settler: OfferSettler,
    offer_repository: OfferRepository,
    config: WorkerConfig,
    status: Arc<Mutex<SweepStatus>>,
}

impl SweepProcessor {
    pub fn new(
        settler: OfferSettler,
        offer_repository: OfferRepository,
        config: WorkerConfig,
        status: Arc<Mutex<SweepStatus>>,
    ) -> Self {
        Self {
            settler,
            offer_repository,
            config,
            status,
        }
    }

    /// Run sweeps forever. A failed sweep is logged and retried on the
    /// next interval; the loop itself never gives up.
    pub async fn start_processing(&self) -> Result<(), SweepError> {
        loop {
            match self.run_sweep().await {
                Ok(summary) if summary.is_quiet() => {
                    logging::log_debug("Sweep found no expired offers");
                }
                Ok(summary) => {
                    logging::log_info(&format!(
                        "Sweep examined {} expired offers: {} settled, {} lost, {} skipped, {} voided, {} errors",
                        summary.examined,
                        summary.settled,
                        summary.lost,
                        summary.skipped,
                        summary.voided,
                        summary.errors
                    ));
                }
                Err(e) => {
                    logging::log_error(&format!("Sweep failed: {}", e));
                }
            }

            tokio::time::sleep(Duration::from_millis(self.config.sweep.interval_ms)).await;
        }
    }

    /// One sweep pass over all expired open offers
    pub async fn run_sweep(&self) -> Result<SweepSummary, SweepError> {
        let expired = self.offer_repository.find_expired_open().await?;

        let mut summary = SweepSummary {
            examined: expired.len() as u64,
            ..Default::default()
        };

        for offer in &expired {
            match self.settler.settle_expired(offer).await {
                Ok(outcome) => summary.record(&outcome),
                Err(e) => {
                    logging::log_error(&format!("Failed to settle offer {}: {}", offer.id, e));
                    summary.errors += 1;
                }
            }
        }

        let mut status = self.status.lock().await;
        status.apply(&summary);

        Ok(summary)
    }
}
