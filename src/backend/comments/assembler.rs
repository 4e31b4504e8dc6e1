//! Threaded comment assembler
//!
//! Fetches the root comments of a piece of content and decorates each one,
//! depth first, with its author, its reactions and its replies. Depth is
//! tracked by the recursion alone: a level 4 comment is fetched and decorated
//! but its replies are never requested, so anything stored deeper stays
//! invisible here.

use std::future::Future;
use std::pin::Pin;

use crate::backend::store::{CommentFilter, ContentStore, StoreError};
use crate::shared::content::{
    Authored, Comment, CommentNode, CommentTarget, ReactionTarget, MAX_COMMENT_LEVEL,
};

type NodeFuture<'a> = Pin<Box<dyn Future<Output = Result<CommentNode, StoreError>> + Send + 'a>>;

/// Assemble every comment thread attached to `target`
///
/// Roots come back in store order and replies in store order under their
/// parent. Content without comments yields an empty vector.
pub async fn assemble_thread(
    store: &dyn ContentStore,
    target: CommentTarget,
) -> Result<Vec<CommentNode>, StoreError> {
    let roots = store.find_comments(CommentFilter::TopLevel(target)).await?;

    let mut thread = Vec::with_capacity(roots.len());
    for root in roots {
        thread.push(decorate(store, root, 1).await?);
    }
    Ok(thread)
}

fn decorate<'a>(
    store: &'a dyn ContentStore,
    authored: Authored<Comment>,
    depth: i16,
) -> NodeFuture<'a> {
    Box::pin(async move {
        let Authored { item: comment, author } = authored;
        let reactions = store
            .find_reactions(ReactionTarget::Comment(comment.id))
            .await?;

        let mut replies = Vec::new();
        if depth < MAX_COMMENT_LEVEL {
            for child in store.find_comments(CommentFilter::RepliesTo(comment.id)).await? {
                replies.push(decorate(store, child, depth + 1).await?);
            }
        }

        Ok(CommentNode {
            comment,
            author,
            reactions,
            replies,
        })
    })
}
