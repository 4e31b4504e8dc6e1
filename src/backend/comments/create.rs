//! Comment write path
//!
//! Every precondition is checked before anything is persisted: the parent of
//! a reply must exist and still accept replies, and a top-level comment must
//! name exactly one existing article or flashcard. Replies copy their
//! parent's content reference.

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::store::ContentStore;
use crate::shared::content::{Authored, Comment, CommentDraft, NewComment};

/// Create a comment or a reply on behalf of `author_id`
pub async fn create_comment(
    store: &dyn ContentStore,
    author_id: Uuid,
    draft: CommentDraft,
) -> Result<Authored<Comment>, BackendError> {
    let author = store
        .find_user(author_id)
        .await?
        .ok_or_else(|| BackendError::unauthorized("User not found"))?
        .summary();

    let (level, target) = match draft.parent_id {
        Some(parent_id) => {
            let parent = store
                .find_comment(parent_id)
                .await?
                .ok_or_else(|| BackendError::not_found("Parent comment not found"))?;

            if !parent.accepts_replies() {
                return Err(BackendError::invalid_input(
                    "Maximum comment nesting level reached",
                ));
            }

            if let Some(explicit) = draft.target {
                if explicit != parent.target {
                    return Err(BackendError::invalid_input(
                        "A reply must belong to the same content as its parent",
                    ));
                }
            }

            (parent.level + 1, parent.target)
        }
        None => {
            let target = draft.target.ok_or_else(|| {
                BackendError::invalid_input("Either article_id or flashcard_id is required")
            })?;

            if !store.target_exists(target.into()).await? {
                return Err(BackendError::not_found(format!(
                    "{} {} not found",
                    target.kind(),
                    target.id()
                )));
            }

            (1, target)
        }
    };

    let comment = store
        .create_comment(NewComment {
            text: draft.text,
            level,
            author_id,
            parent_id: draft.parent_id,
            target,
        })
        .await?;

    tracing::info!(
        "Comment {} created by {} on {} at level {}",
        comment.id,
        author_id,
        comment.target,
        comment.level
    );

    Ok(Authored::new(comment, author))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::MemoryStore;
    use crate::shared::content::{Article, CommentTarget, MAX_COMMENT_LEVEL};
    use crate::shared::user::UserProfile;
    use assert_matches::assert_matches;
    use chrono::Utc;

    struct Fixture {
        store: MemoryStore,
        user: UserProfile,
        article: Article,
    }

    async fn fixture() -> Fixture {
        let store = MemoryStore::new();
        let now = Utc::now();
        let user = UserProfile {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            is_admin: false,
            created_at: now,
            updated_at: now,
        };
        let article = Article {
            id: Uuid::new_v4(),
            title: "Ownership".to_string(),
            text: "Moves and borrows".to_string(),
            author_id: user.id,
            space_id: Uuid::new_v4(),
            created_at: now,
        };
        store.insert_user(user.clone()).await;
        store.insert_article(article.clone()).await;
        Fixture {
            store,
            user,
            article,
        }
    }

    fn draft(text: &str, parent_id: Option<Uuid>, target: Option<CommentTarget>) -> CommentDraft {
        CommentDraft {
            text: text.to_string(),
            parent_id,
            target,
        }
    }

    #[tokio::test]
    async fn test_top_level_comment() {
        let f = fixture().await;
        let target = CommentTarget::Article(f.article.id);

        let created = create_comment(&f.store, f.user.id, draft("hi", None, Some(target)))
            .await
            .unwrap();
        assert_eq!(created.item.level, 1);
        assert_eq!(created.item.target, target);
        assert_eq!(created.author.username, "alice");
    }

    #[tokio::test]
    async fn test_top_level_requires_target() {
        let f = fixture().await;
        let result = create_comment(&f.store, f.user.id, draft("hi", None, None)).await;
        assert_matches!(result, Err(BackendError::InvalidInput { .. }));
        assert_eq!(f.store.comment_count().await, 0);
    }

    #[tokio::test]
    async fn test_top_level_unknown_content() {
        let f = fixture().await;
        let target = CommentTarget::Flashcard(Uuid::new_v4());
        let result = create_comment(&f.store, f.user.id, draft("hi", None, Some(target))).await;
        assert_matches!(result, Err(BackendError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_reply_inherits_content_and_level() {
        let f = fixture().await;
        let target = CommentTarget::Article(f.article.id);
        let root = create_comment(&f.store, f.user.id, draft("root", None, Some(target)))
            .await
            .unwrap();

        let reply = create_comment(&f.store, f.user.id, draft("reply", Some(root.item.id), None))
            .await
            .unwrap();
        assert_eq!(reply.item.level, 2);
        assert_eq!(reply.item.target, target);
        assert_eq!(reply.item.parent_id, Some(root.item.id));
    }

    #[tokio::test]
    async fn test_reply_to_missing_parent() {
        let f = fixture().await;
        let result =
            create_comment(&f.store, f.user.id, draft("reply", Some(Uuid::new_v4()), None)).await;
        assert_matches!(result, Err(BackendError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_reply_with_conflicting_content() {
        let f = fixture().await;
        let target = CommentTarget::Article(f.article.id);
        let root = create_comment(&f.store, f.user.id, draft("root", None, Some(target)))
            .await
            .unwrap();

        let other = CommentTarget::Flashcard(Uuid::new_v4());
        let result = create_comment(
            &f.store,
            f.user.id,
            draft("reply", Some(root.item.id), Some(other)),
        )
        .await;
        assert_matches!(result, Err(BackendError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_reply_to_level_four_rejected() {
        let f = fixture().await;
        let target = CommentTarget::Article(f.article.id);
        let mut parent = create_comment(&f.store, f.user.id, draft("1", None, Some(target)))
            .await
            .unwrap();
        for _ in 2..=MAX_COMMENT_LEVEL {
            parent = create_comment(&f.store, f.user.id, draft("n", Some(parent.item.id), None))
                .await
                .unwrap();
        }
        assert_eq!(parent.item.level, MAX_COMMENT_LEVEL);
        let before = f.store.comment_count().await;

        let result =
            create_comment(&f.store, f.user.id, draft("too deep", Some(parent.item.id), None))
                .await;
        assert_matches!(result, Err(BackendError::InvalidInput { .. }));
        assert_eq!(f.store.comment_count().await, before);
    }
}
