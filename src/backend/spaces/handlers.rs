/**
 * Space Handlers
 *
 * - GET /api/spaces/all - every space in detail
 * - GET /api/spaces/subscribed - the caller's subscribed spaces in detail
 * - GET /api/spaces/subscribed-hierarchy - navigation tree pruned to subscriptions
 * - GET /api/spaces/titles - full navigation tree
 * - GET /api/spaces/{space_id} - one space in detail
 * - POST /api/spaces/subscribe - toggle the caller's subscription
 */

use axum::{
    extract::State,
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody, PathParam};
use crate::backend::server::state::AppState;
use crate::backend::spaces::{details, toggle_subscription};
use crate::shared::space::{
    SpaceDetail, SpaceNode, SpaceResponse, SpacesResponse, SubscribeRequest, SubscribeResponse,
};

pub async fn get_all_spaces(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<SpacesResponse<SpaceDetail>>, BackendError> {
    let spaces = details::all_spaces(state.store.as_ref(), user.user_id).await?;
    Ok(Json(SpacesResponse { spaces }))
}

pub async fn get_subscribed_spaces(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<SpacesResponse<SpaceDetail>>, BackendError> {
    let spaces = details::subscribed_spaces(state.store.as_ref(), user.user_id).await?;
    Ok(Json(SpacesResponse { spaces }))
}

pub async fn get_subscribed_hierarchy(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<SpacesResponse<SpaceNode>>, BackendError> {
    let spaces = details::subscribed_hierarchy(state.store.as_ref(), user.user_id).await?;
    Ok(Json(SpacesResponse { spaces }))
}

pub async fn get_space_titles(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
) -> Result<Json<SpacesResponse<SpaceNode>>, BackendError> {
    let spaces = details::space_titles(state.store.as_ref()).await?;
    Ok(Json(SpacesResponse { spaces }))
}

pub async fn get_space(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    PathParam(space_id): PathParam<Uuid>,
) -> Result<Json<SpaceResponse>, BackendError> {
    let space = details::space_by_id(state.store.as_ref(), user.user_id, space_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Space not found"))?;
    Ok(Json(SpaceResponse { space }))
}

/// Toggle subscription handler
///
/// # Example Response
///
/// ```json
/// { "subscribed": true, "message": "Successfully subscribed to space" }
/// ```
pub async fn subscribe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, BackendError> {
    let space_id = request
        .space_id
        .ok_or_else(|| BackendError::invalid_input("Space ID is required"))?;

    let change = toggle_subscription(state.store.as_ref(), user.user_id, space_id).await?;
    Ok(Json(change.into()))
}
