//! Space retrieval
//!
//! Read paths behind the `/api/spaces` endpoints. A `SpaceDetail` is the
//! space plus its members, every article and flashcard decorated with author,
//! reactions and assembled comment threads, and the caller's unread alerts
//! for that space. Reads are issued one after another.

use uuid::Uuid;

use crate::backend::comments::assemble_thread;
use crate::backend::spaces::hierarchy::{build_space_tree, filter_subscribed};
use crate::backend::store::{ContentStore, StoreError};
use crate::shared::content::{Authored, Commentable, ContentDetail};
use crate::shared::space::{Space, SpaceDetail, SpaceNode};

/// Attach reactions and comment threads to a piece of content
pub async fn decorate_content<T>(
    store: &dyn ContentStore,
    content: Authored<T>,
) -> Result<ContentDetail<T>, StoreError>
where
    T: Commentable + Send,
{
    let target = content.item.comment_target();
    let reactions = store.find_reactions(target.into()).await?;
    let comments = assemble_thread(store, target).await?;

    Ok(ContentDetail {
        content,
        reactions,
        comments,
    })
}

/// Everything the space views show about one space, as seen by `user_id`
pub async fn load_space_detail(
    store: &dyn ContentStore,
    user_id: Uuid,
    space: Space,
) -> Result<SpaceDetail, StoreError> {
    let subscribers = store.space_subscribers(space.id).await?;
    let contributors = store.space_contributors(space.id).await?;

    let mut articles = Vec::new();
    for article in store.articles_in_space(space.id).await? {
        articles.push(decorate_content(store, article).await?);
    }

    let mut flashcards = Vec::new();
    for flashcard in store.flashcards_in_space(space.id).await? {
        flashcards.push(decorate_content(store, flashcard).await?);
    }

    let alerts = store.unread_alerts(user_id, space.id).await?;

    Ok(SpaceDetail {
        space,
        subscribers,
        contributors,
        articles,
        flashcards,
        alerts,
    })
}

async fn load_all(
    store: &dyn ContentStore,
    user_id: Uuid,
    spaces: Vec<Space>,
) -> Result<Vec<SpaceDetail>, StoreError> {
    let mut details = Vec::with_capacity(spaces.len());
    for space in spaces {
        details.push(load_space_detail(store, user_id, space).await?);
    }
    Ok(details)
}

/// Every space, in detail
pub async fn all_spaces(
    store: &dyn ContentStore,
    user_id: Uuid,
) -> Result<Vec<SpaceDetail>, StoreError> {
    let spaces = store.list_spaces().await?;
    load_all(store, user_id, spaces).await
}

/// The spaces `user_id` is directly subscribed to, in detail
pub async fn subscribed_spaces(
    store: &dyn ContentStore,
    user_id: Uuid,
) -> Result<Vec<SpaceDetail>, StoreError> {
    let spaces = store.list_subscribed_spaces(user_id).await?;
    load_all(store, user_id, spaces).await
}

/// One space in detail, `None` if it does not exist
pub async fn space_by_id(
    store: &dyn ContentStore,
    user_id: Uuid,
    space_id: Uuid,
) -> Result<Option<SpaceDetail>, StoreError> {
    match store.find_space(space_id).await? {
        Some(space) => Ok(Some(load_space_detail(store, user_id, space).await?)),
        None => Ok(None),
    }
}

/// The full navigation tree
pub async fn space_titles(store: &dyn ContentStore) -> Result<Vec<SpaceNode>, StoreError> {
    Ok(build_space_tree(&store.list_spaces().await?))
}

/// The navigation tree pruned to `user_id`'s subscriptions and their ancestors
pub async fn subscribed_hierarchy(
    store: &dyn ContentStore,
    user_id: Uuid,
) -> Result<Vec<SpaceNode>, StoreError> {
    let tree = build_space_tree(&store.list_spaces().await?);
    let subscribed = store.find_subscription_ids(user_id).await?;
    Ok(filter_subscribed(&tree, &subscribed))
}
