//! Comment Data Structures
//!
//! Comments form threads: a top-level comment (level 1) attached to an
//! article or flashcard, and replies nested under it down to level 4.
//! Replies store the same content reference as their root so a thread can be
//! located without walking parent links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::content::reaction::ReactionView;
use crate::shared::content::target::CommentTarget;
use crate::shared::content::Authored;
use crate::shared::error::SharedError;
use crate::shared::user::UserSummary;

/// Deepest level a comment can sit at; comments here accept no replies
pub const MAX_COMMENT_LEVEL: i16 = 4;

/// A stored comment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Unique comment ID
    pub id: Uuid,
    /// Comment body
    pub text: String,
    /// Depth in the thread, 1 for top-level comments
    pub level: i16,
    /// Author reference
    pub author_id: Uuid,
    /// Parent comment for replies
    pub parent_id: Option<Uuid>,
    /// Article or flashcard this comment (or its root) belongs to
    #[serde(flatten)]
    pub target: CommentTarget,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Whether this comment may receive replies
    pub fn accepts_replies(&self) -> bool {
        self.level < MAX_COMMENT_LEVEL
    }
}

/// A comment with its author, reactions and reply tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: UserSummary,
    pub reactions: Vec<ReactionView>,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// Number of comments in this subtree, including this one
    pub fn size(&self) -> usize {
        1 + self.replies.iter().map(CommentNode::size).sum::<usize>()
    }

    /// Deepest level reached in this subtree
    pub fn max_level(&self) -> i16 {
        self.replies
            .iter()
            .map(CommentNode::max_level)
            .max()
            .unwrap_or(self.comment.level)
    }
}

/// Values the store needs to persist a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub level: i16,
    pub author_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub target: CommentTarget,
}

/// Validated comment creation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub text: String,
    pub parent_id: Option<Uuid>,
    /// Explicit association; required for top-level comments
    pub target: Option<CommentTarget>,
}

/// Request to create a comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub article_id: Option<Uuid>,
    #[serde(default)]
    pub flashcard_id: Option<Uuid>,
}

impl TryFrom<CreateCommentRequest> for CommentDraft {
    type Error = SharedError;

    fn try_from(request: CreateCommentRequest) -> Result<Self, Self::Error> {
        let text = request
            .text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SharedError::missing("text"))?;

        let target = CommentTarget::from_ids(request.article_id, request.flashcard_id)?;

        Ok(CommentDraft {
            text,
            parent_id: request.parent_id,
            target,
        })
    }
}

/// Response after creating a comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentResponse {
    pub comment: Authored<Comment>,
}

/// Response for a thread lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadResponse {
    pub comments: Vec<CommentNode>,
}
