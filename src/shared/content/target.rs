//! Content Targets
//!
//! Comments attach to exactly one article or flashcard; reactions attach to
//! exactly one article, flashcard, comment or alert. Request payloads carry
//! these as a set of optional ids, so the constructors here are the single
//! place where "exactly one" is checked. Past this boundary the invariant is
//! carried by the type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Kind of commentable content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Article,
    Flashcard,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Flashcard => "flashcard",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "article" | "articles" => Ok(ContentKind::Article),
            "flashcard" | "flashcards" => Ok(ContentKind::Flashcard),
            other => Err(SharedError::validation(
                "content_type",
                format!("Unknown content type '{}', expected article or flashcard", other),
            )),
        }
    }
}

/// The piece of content a comment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "content_type", content = "content_id", rename_all = "snake_case")]
pub enum CommentTarget {
    Article(Uuid),
    Flashcard(Uuid),
}

impl CommentTarget {
    pub fn new(kind: ContentKind, id: Uuid) -> Self {
        match kind {
            ContentKind::Article => CommentTarget::Article(id),
            ContentKind::Flashcard => CommentTarget::Flashcard(id),
        }
    }

    /// Resolve the optional ids of a request payload
    ///
    /// Returns `Ok(None)` when neither id is present (a reply may omit both),
    /// and a validation error when both are.
    pub fn from_ids(
        article_id: Option<Uuid>,
        flashcard_id: Option<Uuid>,
    ) -> Result<Option<Self>, SharedError> {
        match (article_id, flashcard_id) {
            (Some(_), Some(_)) => Err(SharedError::validation(
                "content",
                "Cannot comment on both article and flashcard simultaneously",
            )),
            (Some(id), None) => Ok(Some(CommentTarget::Article(id))),
            (None, Some(id)) => Ok(Some(CommentTarget::Flashcard(id))),
            (None, None) => Ok(None),
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            CommentTarget::Article(id) | CommentTarget::Flashcard(id) => *id,
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            CommentTarget::Article(_) => ContentKind::Article,
            CommentTarget::Flashcard(_) => ContentKind::Flashcard,
        }
    }

    pub fn article_id(&self) -> Option<Uuid> {
        match self {
            CommentTarget::Article(id) => Some(*id),
            CommentTarget::Flashcard(_) => None,
        }
    }

    pub fn flashcard_id(&self) -> Option<Uuid> {
        match self {
            CommentTarget::Flashcard(id) => Some(*id),
            CommentTarget::Article(_) => None,
        }
    }
}

impl fmt::Display for CommentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// The entity a reaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "target_type", content = "target_id", rename_all = "snake_case")]
pub enum ReactionTarget {
    Article(Uuid),
    Flashcard(Uuid),
    Comment(Uuid),
    Alert(Uuid),
}

impl ReactionTarget {
    /// Resolve the optional ids of a request payload into exactly one target
    pub fn from_ids(
        article_id: Option<Uuid>,
        flashcard_id: Option<Uuid>,
        comment_id: Option<Uuid>,
        alert_id: Option<Uuid>,
    ) -> Result<Self, SharedError> {
        let candidates = [
            article_id.map(ReactionTarget::Article),
            flashcard_id.map(ReactionTarget::Flashcard),
            comment_id.map(ReactionTarget::Comment),
            alert_id.map(ReactionTarget::Alert),
        ];
        let mut present = candidates.into_iter().flatten();

        match (present.next(), present.next()) {
            (Some(target), None) => Ok(target),
            (None, _) => Err(SharedError::missing(
                "article_id, flashcard_id, comment_id or alert_id",
            )),
            (Some(_), Some(_)) => Err(SharedError::validation(
                "target",
                "A reaction must name exactly one target",
            )),
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            ReactionTarget::Article(id)
            | ReactionTarget::Flashcard(id)
            | ReactionTarget::Comment(id)
            | ReactionTarget::Alert(id) => *id,
        }
    }

    /// Name of the entity kind, also the prefix of its foreign-key column
    pub fn kind_str(&self) -> &'static str {
        match self {
            ReactionTarget::Article(_) => "article",
            ReactionTarget::Flashcard(_) => "flashcard",
            ReactionTarget::Comment(_) => "comment",
            ReactionTarget::Alert(_) => "alert",
        }
    }
}

impl From<CommentTarget> for ReactionTarget {
    fn from(target: CommentTarget) -> Self {
        match target {
            CommentTarget::Article(id) => ReactionTarget::Article(id),
            CommentTarget::Flashcard(id) => ReactionTarget::Flashcard(id),
        }
    }
}

impl fmt::Display for ReactionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind_str(), self.id())
    }
}
