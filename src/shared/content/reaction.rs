//! Reaction Data Structures
//!
//! A reaction is one emoji from a fixed set, left by a user on exactly one
//! target. A user reacts to a given target at most once and reactions are
//! permanent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::shared::content::target::ReactionTarget;
use crate::shared::error::SharedError;
use crate::shared::user::UserSummary;

/// The allowed reaction emojis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Emoji {
    Fire,
    Party,
    Horns,
}

impl Emoji {
    pub const ALL: [Emoji; 3] = [Emoji::Fire, Emoji::Party, Emoji::Horns];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emoji::Fire => "🔥",
            Emoji::Party => "🎉",
            Emoji::Horns => "🤘",
        }
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emoji {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emoji::ALL
            .into_iter()
            .find(|emoji| emoji.as_str() == s)
            .ok_or_else(|| SharedError::validation("emoji", "Invalid emoji. Allowed emojis: 🔥, 🎉, 🤘"))
    }
}

impl TryFrom<String> for Emoji {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Emoji> for String {
    fn from(emoji: Emoji) -> Self {
        emoji.as_str().to_string()
    }
}

/// A stored reaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reaction {
    pub id: Uuid,
    pub emoji: Emoji,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub target: ReactionTarget,
    pub created_at: DateTime<Utc>,
}

/// A reaction decorated with the reacting user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReactionView {
    #[serde(flatten)]
    pub reaction: Reaction,
    pub user: UserSummary,
}

/// Values the store needs to persist a reaction
#[derive(Debug, Clone)]
pub struct NewReaction {
    pub emoji: Emoji,
    pub user_id: Uuid,
    pub target: ReactionTarget,
}

/// Validated reaction creation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionDraft {
    pub emoji: Emoji,
    pub target: ReactionTarget,
}

/// Request to create a reaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReactionRequest {
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub article_id: Option<Uuid>,
    #[serde(default)]
    pub flashcard_id: Option<Uuid>,
    #[serde(default)]
    pub comment_id: Option<Uuid>,
    #[serde(default)]
    pub alert_id: Option<Uuid>,
}

impl TryFrom<CreateReactionRequest> for ReactionDraft {
    type Error = SharedError;

    fn try_from(request: CreateReactionRequest) -> Result<Self, Self::Error> {
        let emoji = request
            .emoji
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| SharedError::missing("emoji"))?
            .parse::<Emoji>()?;

        let target = ReactionTarget::from_ids(
            request.article_id,
            request.flashcard_id,
            request.comment_id,
            request.alert_id,
        )?;

        Ok(ReactionDraft { emoji, target })
    }
}

/// Response after creating a reaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReactionResponse {
    pub reaction: ReactionView,
}
