/**
 * API Routes
 *
 * Every route here sits behind the auth middleware.
 *
 * # Routes
 *
 * ## Authentication
 * - `GET /api/auth/me` - Profile of the caller
 *
 * ## Spaces
 * - `GET /api/spaces/all`
 * - `GET /api/spaces/subscribed`
 * - `GET /api/spaces/subscribed-hierarchy`
 * - `GET /api/spaces/titles`
 * - `GET /api/spaces/{space_id}`
 * - `POST /api/spaces/subscribe`
 *
 * ## Content
 * - `POST /api/content/comments`
 * - `POST /api/content/reactions`
 * - `GET /api/content/{kind}/{id}/comments`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::get_me;
use crate::backend::comments::{create_comment_handler, get_thread};
use crate::backend::middleware::auth_middleware;
use crate::backend::reactions::create_reaction_handler;
use crate::backend::server::state::AppState;
use crate::backend::spaces::handlers::{
    get_all_spaces, get_space, get_space_titles, get_subscribed_hierarchy,
    get_subscribed_spaces, subscribe,
};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let api = Router::new()
        // Authentication
        .route("/api/auth/me", get(get_me))
        // Spaces
        .route("/api/spaces/all", get(get_all_spaces))
        .route("/api/spaces/subscribed", get(get_subscribed_spaces))
        .route("/api/spaces/subscribed-hierarchy", get(get_subscribed_hierarchy))
        .route("/api/spaces/titles", get(get_space_titles))
        .route("/api/spaces/subscribe", post(subscribe))
        .route("/api/spaces/{space_id}", get(get_space))
        // Content
        .route("/api/content/comments", post(create_comment_handler))
        .route("/api/content/reactions", post(create_reaction_handler))
        .route("/api/content/{kind}/{id}/comments", get(get_thread))
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router.merge(api)
}
