//! Subscription toggling
//!
//! Subscribing records the membership and an alert for the subscriber in one
//! store write, so neither can exist without the other; unsubscribing only
//! removes the membership. Two concurrent subscribes for the same pair are
//! settled by the store's uniqueness constraint.

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::store::ContentStore;
use crate::shared::space::{AlertKind, NewAlert, SubscriptionChange};

/// Flip `user_id`'s subscription to `space_id`
pub async fn toggle_subscription(
    store: &dyn ContentStore,
    user_id: Uuid,
    space_id: Uuid,
) -> Result<SubscriptionChange, BackendError> {
    let space = store
        .find_space(space_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Space not found"))?;

    if store.delete_subscription(user_id, space_id).await? {
        tracing::info!("User {} unsubscribed from space {}", user_id, space_id);
        return Ok(SubscriptionChange::Unsubscribed);
    }

    let alert = NewAlert {
        kind: AlertKind::Subscription,
        message: format!("New member joined {}", space.name),
        user_id,
        space_id,
    };
    store.create_subscription(user_id, space_id, alert).await?;

    tracing::info!("User {} subscribed to space {}", user_id, space_id);
    Ok(SubscriptionChange::Subscribed)
}
