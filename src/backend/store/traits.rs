//! ContentStore trait definition
//!
//! Abstract interface for every read and write the service performs.

use async_trait::async_trait;
use std::collections::HashSet;
use uuid::Uuid;

use crate::backend::store::{CommentFilter, StoreError};
use crate::shared::content::{
    Article, Authored, Comment, Flashcard, NewComment, NewReaction, Reaction, ReactionTarget,
    ReactionView,
};
use crate::shared::space::{Alert, NewAlert, Space};
use crate::shared::user::{UserProfile, UserSummary};

/// Abstract interface for all content, space and membership storage.
#[async_trait]
pub trait ContentStore: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Get a user profile by ID
    async fn find_user(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError>;

    // ========================================================================
    // Comments
    // ========================================================================

    /// Get a comment by ID
    async fn find_comment(&self, id: Uuid) -> Result<Option<Comment>, StoreError>;

    /// List comments matching the filter, oldest first, with their authors
    async fn find_comments(
        &self,
        filter: CommentFilter,
    ) -> Result<Vec<Authored<Comment>>, StoreError>;

    /// Persist a comment
    ///
    /// Fails with `MissingReference` when the author, the parent or the
    /// commented content does not exist.
    async fn create_comment(&self, comment: NewComment) -> Result<Comment, StoreError>;

    // ========================================================================
    // Reactions
    // ========================================================================

    /// List reactions on a target, oldest first, with the reacting users
    async fn find_reactions(&self, target: ReactionTarget)
        -> Result<Vec<ReactionView>, StoreError>;

    /// Get the reaction a user left on a target, if any
    async fn find_reaction(
        &self,
        user_id: Uuid,
        target: ReactionTarget,
    ) -> Result<Option<Reaction>, StoreError>;

    /// Persist a reaction
    ///
    /// Fails with `ConstraintViolation` when the user already reacted to the
    /// target and with `MissingReference` when the user or target is unknown.
    async fn create_reaction(&self, reaction: NewReaction) -> Result<Reaction, StoreError>;

    /// Whether the entity a reaction or comment points at exists
    async fn target_exists(&self, target: ReactionTarget) -> Result<bool, StoreError>;

    // ========================================================================
    // Spaces
    // ========================================================================

    /// Get a space by ID
    async fn find_space(&self, id: Uuid) -> Result<Option<Space>, StoreError>;

    /// List every space, oldest first
    async fn list_spaces(&self) -> Result<Vec<Space>, StoreError>;

    /// List the spaces a user is directly subscribed to, oldest first
    async fn list_subscribed_spaces(&self, user_id: Uuid) -> Result<Vec<Space>, StoreError>;

    /// Users subscribed to a space
    async fn space_subscribers(&self, space_id: Uuid) -> Result<Vec<UserSummary>, StoreError>;

    /// Users contributing to a space
    async fn space_contributors(&self, space_id: Uuid) -> Result<Vec<UserSummary>, StoreError>;

    /// Articles of a space with their authors
    async fn articles_in_space(
        &self,
        space_id: Uuid,
    ) -> Result<Vec<Authored<Article>>, StoreError>;

    /// Flashcards of a space with their authors
    async fn flashcards_in_space(
        &self,
        space_id: Uuid,
    ) -> Result<Vec<Authored<Flashcard>>, StoreError>;

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// IDs of every space the user is directly subscribed to
    async fn find_subscription_ids(&self, user_id: Uuid) -> Result<HashSet<Uuid>, StoreError>;

    /// Record a subscription and its alert as one unit
    ///
    /// Either both rows are written or neither is. Fails with
    /// `ConstraintViolation` when the subscription already exists.
    async fn create_subscription(
        &self,
        user_id: Uuid,
        space_id: Uuid,
        alert: NewAlert,
    ) -> Result<Alert, StoreError>;

    /// Remove a subscription, returning whether one existed
    async fn delete_subscription(&self, user_id: Uuid, space_id: Uuid)
        -> Result<bool, StoreError>;

    // ========================================================================
    // Alerts
    // ========================================================================

    /// Unread alerts of a user within a space, oldest first
    async fn unread_alerts(&self, user_id: Uuid, space_id: Uuid)
        -> Result<Vec<Alert>, StoreError>;
}
