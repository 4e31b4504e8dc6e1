/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store selection, token setup, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the store (PostgreSQL if configured and reachable, else in-memory)
 * 2. Build the token issuer from the configured secret and TTL
 * 3. Create the router
 */

use axum::Router;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::ContentStore;
use crate::shared::config::ServerConfig;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// - Missing database: Server runs on the in-memory store
/// - Migration failures: Logged but don't prevent startup
pub async fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing KSpace backend server");

    let store = load_store(&config).await;
    create_app_with_store(&config, store)
}

/// Create the application around an existing store
pub fn create_app_with_store(config: &ServerConfig, store: Arc<dyn ContentStore>) -> Router<()> {
    let app_state = AppState::new(store, TokenIssuer::from_config(config));
    let app = create_router(app_state, config.cors_permissive);

    tracing::info!("Router configured");
    app
}
