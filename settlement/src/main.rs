use proleague_settlement::application::sweeper::{OfferSettler, SweepProcessor, SweepStatus};
use proleague_settlement::config::WorkerConfig;
use proleague_settlement::infrastructure::persistence::{DbPool, RepositoryFactory};
use proleague_settlement::infrastructure::web;
use proleague_settlement::utils::logging;

use std::sync::Arc;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    logging::init_logger();

    let config = WorkerConfig::from_env();
    logging::log_info(&format!(
        "Settlement worker starting, sweep interval {}ms",
        config.sweep.interval_ms
    ));

    // Database connection and sweeper initialization
    match DbPool::new(&config).await {
        Ok(db_pool) => {
            let repositories = RepositoryFactory::create_repositories(&db_pool);
            let status = Arc::new(Mutex::new(SweepStatus::default()));

            let settler = OfferSettler::new(
                repositories.offers.clone(),
                repositories.players.clone(),
                repositories.clubs.clone(),
                repositories.users.clone(),
                repositories.notifications.clone(),
            );
            let processor = SweepProcessor::new(
                settler,
                repositories.offers,
                config.clone(),
                status.clone(),
            );

            // Status server runs alongside the sweep loop
            let web_config = config.clone();
            let web_status = status.clone();
            tokio::spawn(async move {
                web::server::start_server(&web_config, web_status).await;
            });

            tokio::select! {
                result = processor.start_processing() => {
                    if let Err(e) = result {
                        logging::log_error(&format!("Sweep loop stopped: {}", e));
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    logging::log_info("Shutdown signal received, stopping settlement worker");
                }
            }
        }
        Err(e) => logging::log_error(&format!("Failed to connect to database: {}", e)),
    }
}
