/**
 * Comment Handlers
 *
 * - POST /api/content/comments - create a comment or reply
 * - GET /api/content/{kind}/{id}/comments - assembled threads of a content item
 *
 * Both translate the payload into the core call and let `BackendError`
 * pick the status code.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::comments::{assemble_thread, create_comment};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody, PathParam};
use crate::backend::server::state::AppState;
use crate::shared::content::{
    CommentDraft, CommentTarget, ContentKind, CreateCommentRequest, CreateCommentResponse,
    ThreadResponse,
};

/// Create comment handler
///
/// # Example Request
///
/// ```json
/// { "text": "Great point", "parent_id": "123e4567-e89b-12d3-a456-426614174000" }
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - blank text, both or neither content ids, depth limit
/// * `404 Not Found` - parent comment or content does not exist
pub async fn create_comment_handler(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CreateCommentResponse>), BackendError> {
    let draft = CommentDraft::try_from(request)?;
    let comment = create_comment(state.store.as_ref(), user.user_id, draft).await?;

    Ok((StatusCode::CREATED, Json(CreateCommentResponse { comment })))
}

/// Thread retrieval handler
///
/// `kind` is `article(s)` or `flashcard(s)`.
pub async fn get_thread(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    PathParam((kind, id)): PathParam<(String, Uuid)>,
) -> Result<Json<ThreadResponse>, BackendError> {
    let kind: ContentKind = kind.parse()?;
    let target = CommentTarget::new(kind, id);

    if !state.store.target_exists(target.into()).await? {
        return Err(BackendError::not_found(format!("{} {} not found", kind, id)));
    }

    let comments = assemble_thread(state.store.as_ref(), target).await?;
    Ok(Json(ThreadResponse { comments }))
}
