/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds only shared, immutable handles:
 * - the store behind `Arc<dyn ContentStore>`
 * - the token issuer used by the auth middleware
 *
 * Requests share no mutable in-process state; uniqueness races are settled
 * by the store.
 *
 * # Example
 *
 * ```rust,no_run
 * use kspace::backend::server::state::AppState;
 * use kspace::backend::store::ContentStore;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let spaces = state.store.list_spaces().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::store::ContentStore;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Data-access boundary
    pub store: Arc<dyn ContentStore>,

    /// Bearer token verification
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, tokens: TokenIssuer) -> Self {
        Self { store, tokens }
    }
}

/// Implement FromRef for the store
///
/// Lets handlers take `State<Arc<dyn ContentStore>>` directly.
impl FromRef<AppState> for Arc<dyn ContentStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
