//! Reaction target resolver
//!
//! A validated `ReactionDraft` already names exactly one target and an
//! allowed emoji. What is left is checking that the target exists and that
//! the user has not reacted to it yet, then persisting. The store's unique
//! index is the final word when two requests race past the check.

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::store::ContentStore;
use crate::shared::content::{NewReaction, ReactionDraft, ReactionView};

/// Record `user_id`'s reaction on the draft's target
pub async fn create_reaction(
    store: &dyn ContentStore,
    user_id: Uuid,
    draft: ReactionDraft,
) -> Result<ReactionView, BackendError> {
    let target = draft.target;

    if !store.target_exists(target).await? {
        return Err(BackendError::not_found(format!(
            "{} {} not found",
            target.kind_str(),
            target.id()
        )));
    }

    if store.find_reaction(user_id, target).await?.is_some() {
        tracing::warn!("User {} already reacted to {}", user_id, target);
        return Err(BackendError::conflict(format!(
            "You have already reacted to this {}",
            target.kind_str()
        )));
    }

    let user = store
        .find_user(user_id)
        .await?
        .ok_or_else(|| BackendError::unauthorized("User not found"))?
        .summary();

    let reaction = store
        .create_reaction(NewReaction {
            emoji: draft.emoji,
            user_id,
            target,
        })
        .await?;

    tracing::info!("Reaction {} by {} on {}", reaction.emoji, user_id, target);

    Ok(ReactionView { reaction, user })
}
