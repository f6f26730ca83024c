// Status web server for the settlement worker

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::application::sweeper::SweepStatus;
use crate::config::WorkerConfig;
use crate::utils::logging;

use super::routes::{create_router, AppState};

/// Start the status server. Runs until the process exits.
pub async fn start_server(config: &WorkerConfig, status: Arc<Mutex<SweepStatus>>) {
    let state = AppState { status };

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.sweep.status_api_port));

    logging::log_info(&format!("Starting status server on http://{}", addr));
    match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                logging::log_error(&format!("Status server stopped: {}", e));
            }
        }
        Err(e) => {
            logging::log_error(&format!("Failed to bind status server: {}", e));
        }
    }
}
