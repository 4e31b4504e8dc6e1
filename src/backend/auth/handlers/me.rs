/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * the profile of the currently authenticated user.
 *
 * # Authentication
 *
 * The auth middleware has already verified the bearer token and confirmed
 * the user exists; the identity arrives through the `AuthUser` extractor.
 *
 * # Response
 *
 * Returns the profile without credential fields.
 */

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::user::ProfileResponse;

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - If the user disappeared after authentication
/// * `500 Internal Server Error` - If the store lookup fails
///
/// # Example Response
///
/// ```json
/// {
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "username": "alice",
///     "email": "alice@example.com",
///     "is_admin": false,
///     "created_at": "2025-01-01T00:00:00Z",
///     "updated_at": "2025-01-01T00:00:00Z"
///   }
/// }
/// ```
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProfileResponse>, BackendError> {
    let profile = state.store.find_user(user.user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", user.user_id);
        BackendError::not_found("User not found")
    })?;

    Ok(Json(ProfileResponse { user: profile }))
}
