/**
 * Reaction Handlers
 *
 * - POST /api/content/reactions - react to an article, flashcard, comment or alert
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody};
use crate::backend::reactions::create_reaction;
use crate::backend::server::state::AppState;
use crate::shared::content::{CreateReactionRequest, CreateReactionResponse, ReactionDraft};

/// Create reaction handler
///
/// # Example Request
///
/// ```json
/// { "emoji": "🔥", "comment_id": "123e4567-e89b-12d3-a456-426614174000" }
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - emoji missing or not one of 🔥 🎉 🤘, zero or several targets
/// * `404 Not Found` - target does not exist
/// * `409 Conflict` - the user already reacted to this target
pub async fn create_reaction_handler(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreateReactionRequest>,
) -> Result<(StatusCode, Json<CreateReactionResponse>), BackendError> {
    let draft = ReactionDraft::try_from(request)?;
    let reaction = create_reaction(state.store.as_ref(), user.user_id, draft).await?;

    Ok((StatusCode::CREATED, Json(CreateReactionResponse { reaction })))
}
