//! In-memory implementation of `ContentStore`
//!
//! Every table is a `tokio::sync::RwLock` over an insertion-ordered `Vec`
//! (users are keyed by id). Uniqueness checks happen under the same write
//! lock as the insert, so concurrent duplicates resolve exactly like a
//! database unique index. Writes check their references the way the
//! schema's foreign keys do.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::store::{CommentFilter, ContentStore, StoreError};
use crate::shared::content::{
    Article, Authored, Comment, Flashcard, NewComment, NewReaction, Reaction, ReactionTarget,
    ReactionView,
};
use crate::shared::space::{Alert, NewAlert, Space};
use crate::shared::user::{UserProfile, UserSummary};

/// In-process `ContentStore`
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, UserProfile>>,
    spaces: RwLock<Vec<Space>>,
    articles: RwLock<Vec<Article>>,
    flashcards: RwLock<Vec<Flashcard>>,
    comments: RwLock<Vec<Comment>>,
    reactions: RwLock<Vec<Reaction>>,
    alerts: RwLock<Vec<Alert>>,
    /// (user_id, space_id)
    subscriptions: RwLock<Vec<(Uuid, Uuid)>>,
    /// (user_id, space_id)
    contributions: RwLock<Vec<(Uuid, Uuid)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Seeding (users, spaces and content are provisioned outside this service)
    // ========================================================================

    pub async fn insert_user(&self, user: UserProfile) {
        self.users.write().await.insert(user.id, user);
    }

    pub async fn insert_space(&self, space: Space) {
        self.spaces.write().await.push(space);
    }

    pub async fn insert_article(&self, article: Article) {
        self.articles.write().await.push(article);
    }

    pub async fn insert_flashcard(&self, flashcard: Flashcard) {
        self.flashcards.write().await.push(flashcard);
    }

    /// Store a comment as-is, bypassing the write-path checks
    pub async fn insert_comment(&self, comment: Comment) {
        self.comments.write().await.push(comment);
    }

    pub async fn add_contribution(&self, user_id: Uuid, space_id: Uuid) {
        let mut contributions = self.contributions.write().await;
        if !contributions.contains(&(user_id, space_id)) {
            contributions.push((user_id, space_id));
        }
    }

    pub async fn comment_count(&self) -> usize {
        self.comments.read().await.len()
    }

    pub async fn reaction_count(&self) -> usize {
        self.reactions.read().await.len()
    }

    pub async fn alerts_for(&self, user_id: Uuid) -> Vec<Alert> {
        self.alerts
            .read()
            .await
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect()
    }

    async fn ensure_user(&self, id: Uuid) -> Result<(), StoreError> {
        if self.users.read().await.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::MissingReference(format!("user {}", id)))
        }
    }

    async fn ensure_space(&self, id: Uuid) -> Result<(), StoreError> {
        if self.spaces.read().await.iter().any(|s| s.id == id) {
            Ok(())
        } else {
            Err(StoreError::MissingReference(format!("space {}", id)))
        }
    }

    async fn ensure_target(&self, target: ReactionTarget) -> Result<(), StoreError> {
        if self.target_exists(target).await? {
            Ok(())
        } else {
            Err(StoreError::MissingReference(target.to_string()))
        }
    }

    async fn summaries(&self, ids: &[Uuid]) -> Result<Vec<UserSummary>, StoreError> {
        let users = self.users.read().await;
        ids.iter()
            .map(|id| {
                users
                    .get(id)
                    .map(UserProfile::summary)
                    .ok_or_else(|| StoreError::InvalidRow(format!("unknown user {}", id)))
            })
            .collect()
    }

    async fn with_authors<T, F>(
        &self,
        items: Vec<T>,
        author_of: F,
    ) -> Result<Vec<Authored<T>>, StoreError>
    where
        F: Fn(&T) -> Uuid,
    {
        let ids: Vec<Uuid> = items.iter().map(&author_of).collect();
        let authors = self.summaries(&ids).await?;
        Ok(items
            .into_iter()
            .zip(authors)
            .map(|(item, author)| Authored::new(item, author))
            .collect())
    }
}

fn reaction_matches(reaction: &Reaction, target: ReactionTarget) -> bool {
    reaction.target == target
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>, StoreError> {
        Ok(self
            .comments
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_comments(
        &self,
        filter: CommentFilter,
    ) -> Result<Vec<Authored<Comment>>, StoreError> {
        let matching: Vec<Comment> = self
            .comments
            .read()
            .await
            .iter()
            .filter(|c| match filter {
                CommentFilter::TopLevel(target) => c.parent_id.is_none() && c.target == target,
                CommentFilter::RepliesTo(parent_id) => c.parent_id == Some(parent_id),
            })
            .cloned()
            .collect();

        self.with_authors(matching, |c| c.author_id).await
    }

    async fn create_comment(&self, comment: NewComment) -> Result<Comment, StoreError> {
        self.ensure_user(comment.author_id).await?;
        self.ensure_target(comment.target.into()).await?;

        let mut comments = self.comments.write().await;
        if let Some(parent_id) = comment.parent_id {
            if !comments.iter().any(|c| c.id == parent_id) {
                return Err(StoreError::MissingReference(format!("comment {}", parent_id)));
            }
        }

        let stored = Comment {
            id: Uuid::new_v4(),
            text: comment.text,
            level: comment.level,
            author_id: comment.author_id,
            parent_id: comment.parent_id,
            target: comment.target,
            created_at: Utc::now(),
        };
        comments.push(stored.clone());
        Ok(stored)
    }

    async fn find_reactions(
        &self,
        target: ReactionTarget,
    ) -> Result<Vec<ReactionView>, StoreError> {
        let matching: Vec<Reaction> = self
            .reactions
            .read()
            .await
            .iter()
            .filter(|r| reaction_matches(r, target))
            .cloned()
            .collect();

        let ids: Vec<Uuid> = matching.iter().map(|r| r.user_id).collect();
        let users = self.summaries(&ids).await?;
        Ok(matching
            .into_iter()
            .zip(users)
            .map(|(reaction, user)| ReactionView { reaction, user })
            .collect())
    }

    async fn find_reaction(
        &self,
        user_id: Uuid,
        target: ReactionTarget,
    ) -> Result<Option<Reaction>, StoreError> {
        Ok(self
            .reactions
            .read()
            .await
            .iter()
            .find(|r| r.user_id == user_id && reaction_matches(r, target))
            .cloned())
    }

    async fn create_reaction(&self, reaction: NewReaction) -> Result<Reaction, StoreError> {
        self.ensure_user(reaction.user_id).await?;
        self.ensure_target(reaction.target).await?;

        let mut reactions = self.reactions.write().await;
        if reactions
            .iter()
            .any(|r| r.user_id == reaction.user_id && reaction_matches(r, reaction.target))
        {
            return Err(StoreError::ConstraintViolation(format!(
                "user {} already reacted to {}",
                reaction.user_id, reaction.target
            )));
        }

        let stored = Reaction {
            id: Uuid::new_v4(),
            emoji: reaction.emoji,
            user_id: reaction.user_id,
            target: reaction.target,
            created_at: Utc::now(),
        };
        reactions.push(stored.clone());
        Ok(stored)
    }

    async fn target_exists(&self, target: ReactionTarget) -> Result<bool, StoreError> {
        let exists = match target {
            ReactionTarget::Article(id) => self.articles.read().await.iter().any(|a| a.id == id),
            ReactionTarget::Flashcard(id) => {
                self.flashcards.read().await.iter().any(|f| f.id == id)
            }
            ReactionTarget::Comment(id) => self.comments.read().await.iter().any(|c| c.id == id),
            ReactionTarget::Alert(id) => self.alerts.read().await.iter().any(|a| a.id == id),
        };
        Ok(exists)
    }

    async fn find_space(&self, id: Uuid) -> Result<Option<Space>, StoreError> {
        Ok(self.spaces.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn list_spaces(&self) -> Result<Vec<Space>, StoreError> {
        Ok(self.spaces.read().await.clone())
    }

    async fn list_subscribed_spaces(&self, user_id: Uuid) -> Result<Vec<Space>, StoreError> {
        let subscribed = self.find_subscription_ids(user_id).await?;
        Ok(self
            .spaces
            .read()
            .await
            .iter()
            .filter(|s| subscribed.contains(&s.id))
            .cloned()
            .collect())
    }

    async fn space_subscribers(&self, space_id: Uuid) -> Result<Vec<UserSummary>, StoreError> {
        let ids: Vec<Uuid> = self
            .subscriptions
            .read()
            .await
            .iter()
            .filter(|(_, space)| *space == space_id)
            .map(|(user, _)| *user)
            .collect();
        self.summaries(&ids).await
    }

    async fn space_contributors(&self, space_id: Uuid) -> Result<Vec<UserSummary>, StoreError> {
        let ids: Vec<Uuid> = self
            .contributions
            .read()
            .await
            .iter()
            .filter(|(_, space)| *space == space_id)
            .map(|(user, _)| *user)
            .collect();
        self.summaries(&ids).await
    }

    async fn articles_in_space(
        &self,
        space_id: Uuid,
    ) -> Result<Vec<Authored<Article>>, StoreError> {
        let articles: Vec<Article> = self
            .articles
            .read()
            .await
            .iter()
            .filter(|a| a.space_id == space_id)
            .cloned()
            .collect();
        self.with_authors(articles, |a| a.author_id).await
    }

    async fn flashcards_in_space(
        &self,
        space_id: Uuid,
    ) -> Result<Vec<Authored<Flashcard>>, StoreError> {
        let flashcards: Vec<Flashcard> = self
            .flashcards
            .read()
            .await
            .iter()
            .filter(|f| f.space_id == space_id)
            .cloned()
            .collect();
        self.with_authors(flashcards, |f| f.author_id).await
    }

    async fn find_subscription_ids(&self, user_id: Uuid) -> Result<HashSet<Uuid>, StoreError> {
        Ok(self
            .subscriptions
            .read()
            .await
            .iter()
            .filter(|(user, _)| *user == user_id)
            .map(|(_, space)| *space)
            .collect())
    }

    async fn create_subscription(
        &self,
        user_id: Uuid,
        space_id: Uuid,
        alert: NewAlert,
    ) -> Result<Alert, StoreError> {
        self.ensure_user(user_id).await?;
        self.ensure_space(space_id).await?;
        self.ensure_user(alert.user_id).await?;
        self.ensure_space(alert.space_id).await?;

        // Both locks are held so the pair lands together or not at all
        let mut subscriptions = self.subscriptions.write().await;
        let mut alerts = self.alerts.write().await;
        if subscriptions.contains(&(user_id, space_id)) {
            return Err(StoreError::ConstraintViolation(format!(
                "user {} already subscribed to space {}",
                user_id, space_id
            )));
        }

        let stored = Alert {
            id: Uuid::new_v4(),
            kind: alert.kind,
            message: alert.message,
            user_id: alert.user_id,
            space_id: alert.space_id,
            is_read: false,
            created_at: Utc::now(),
        };
        subscriptions.push((user_id, space_id));
        alerts.push(stored.clone());
        Ok(stored)
    }

    async fn delete_subscription(
        &self,
        user_id: Uuid,
        space_id: Uuid,
    ) -> Result<bool, StoreError> {
        let mut subscriptions = self.subscriptions.write().await;
        let before = subscriptions.len();
        subscriptions.retain(|pair| *pair != (user_id, space_id));
        Ok(subscriptions.len() < before)
    }

    async fn unread_alerts(
        &self,
        user_id: Uuid,
        space_id: Uuid,
    ) -> Result<Vec<Alert>, StoreError> {
        Ok(self
            .alerts
            .read()
            .await
            .iter()
            .filter(|a| a.user_id == user_id && a.space_id == space_id && !a.is_read)
            .cloned()
            .collect())
    }
}
