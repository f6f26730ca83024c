// Status API routes for the settlement worker

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tokio::sync::Mutex;

use crate::application::sweeper::SweepStatus;

/// Application state shared with all routes
#[derive(Clone)]
pub struct AppState {
    pub status: Arc<Mutex<SweepStatus>>,
}

/// Create the status API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .route("/api/status", get(status))
        .with_state(state)
}

/// Root endpoint
async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Pro League Settlement Worker",
        "endpoints": [
            "/api/health",
            "/api/status",
        ]
    }))
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Sweep counters and the last run timestamp
async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.status.lock().await;
    Json(status.clone())
}
