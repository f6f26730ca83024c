// Pro League Office API server entry point

mod auth;
mod config;
mod db;
mod domain;
mod entity;
mod error;
mod handlers;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{delete, get, post, put, Router};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ApiConfig;
use db::DbPool;
use handlers::{
    ban_user, get_club, get_club_cap_space, get_clubs, get_notifications, get_open_offers,
    get_player, get_player_highest_offer, get_player_offers, get_players, get_settings,
    health_check, list_banned_users, list_player_mappings, mark_notification_read,
    set_club_availability, submit_offer, unban_user, update_settings, upsert_player_mapping,
    withdraw_offer, AppState,
};

fn load_env() {
    dotenv::dotenv().ok();
}

#[tokio::main]
async fn main() {
    load_env();
    // Configure logging with tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load API configuration from environment
    let config = ApiConfig::from_env();
    tracing::info!("Configuration loaded");

    // Establish database connection pool
    let db_pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Connected to database");

    // Initialize data repositories
    let repositories = db_pool.repositories();
    let app_state = AppState {
        repositories: Arc::new(repositories),
    };

    // Configure CORS policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::AUTHORIZATION,
            header::HeaderName::from_static("x-user-id"),
        ])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600));

    // Set up API routes
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/players", get(get_players))
        .route("/players/{id}", get(get_player))
        .route("/players/{id}/offers", get(get_player_offers))
        .route("/players/{id}/offers/highest", get(get_player_highest_offer))
        .route("/clubs", get(get_clubs))
        .route("/clubs/{id}", get(get_club))
        .route("/clubs/{id}/cap-space", get(get_club_cap_space))
        .route("/offers", post(submit_offer).get(get_open_offers))
        .route("/offers/{id}", delete(withdraw_offer))
        .route("/notifications", get(get_notifications))
        .route("/notifications/{id}/read", post(mark_notification_read))
        .route("/admin/settings", get(get_settings).put(update_settings))
        .route("/admin/banned-users", get(list_banned_users).post(ban_user))
        .route("/admin/banned-users/{user_id}", delete(unban_user))
        .route("/admin/clubs/{id}/availability", put(set_club_availability))
        .route(
            "/admin/player-mappings",
            get(list_player_mappings).put(upsert_player_mapping),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Parse server address from config
    let addr: SocketAddr = config.server_addr().parse().expect("Invalid address");

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
