//! Article and Flashcard Data Structures
//!
//! The two kinds of content a space holds. Both can be commented on and
//! reacted to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::target::CommentTarget;

/// A long-form article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub author_id: Uuid,
    pub space_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A study flashcard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Flashcard {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub author_id: Uuid,
    pub space_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Content that can carry a comment thread
pub trait Commentable {
    fn comment_target(&self) -> CommentTarget;
}

impl Commentable for Article {
    fn comment_target(&self) -> CommentTarget {
        CommentTarget::Article(self.id)
    }
}

impl Commentable for Flashcard {
    fn comment_target(&self) -> CommentTarget {
        CommentTarget::Flashcard(self.id)
    }
}
