//! Content Module
//!
//! Data structures for everything users write inside a space:
//!
//! - `Article`, `Flashcard` - the content itself
//! - `Comment`, `CommentNode` - threaded discussion on content
//! - `Reaction`, `Emoji` - fixed-set emoji reactions
//! - `CommentTarget`, `ReactionTarget` - what a comment or reaction attaches to
//!
//! # Usage
//!
//! ```rust
//! use kspace::shared::content::{CommentTarget, Emoji};
//! ```

use serde::{Deserialize, Serialize};

use crate::shared::user::UserSummary;

pub mod article;
pub mod comment;
pub mod reaction;
pub mod target;

// Re-export all types
pub use article::{Article, Commentable, Flashcard};
pub use comment::{
    Comment, CommentDraft, CommentNode, CreateCommentRequest, CreateCommentResponse, NewComment,
    ThreadResponse, MAX_COMMENT_LEVEL,
};
pub use reaction::{
    CreateReactionRequest, CreateReactionResponse, Emoji, NewReaction, Reaction, ReactionDraft,
    ReactionView,
};
pub use target::{CommentTarget, ContentKind, ReactionTarget};

/// A record paired with the summary of its author
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Authored<T> {
    #[serde(flatten)]
    pub item: T,
    pub author: UserSummary,
}

impl<T> Authored<T> {
    pub fn new(item: T, author: UserSummary) -> Self {
        Self { item, author }
    }
}

/// An article or flashcard with its reactions and comment threads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentDetail<T> {
    #[serde(flatten)]
    pub content: Authored<T>,
    pub reactions: Vec<ReactionView>,
    pub comments: Vec<CommentNode>,
}
