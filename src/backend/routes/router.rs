/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check (public)
 * 2. API routes (authenticated)
 * 3. Fallback handler (404 JSON)
 */

use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::ErrorBody;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the store and token issuer
/// * `cors_permissive` - Allow any origin, method and header
pub fn create_router(app_state: AppState, cors_permissive: bool) -> Router<()> {
    let cors = if cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router, app_state.clone());

    // Fallback handler for 404
    let router = router.fallback(not_found);

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(StatusCode::NOT_FOUND, "Route not found")),
    )
}
