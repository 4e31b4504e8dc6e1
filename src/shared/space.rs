//! Space Data Structures
//!
//! Spaces are nested containers, at most three levels deep. Level 1 spaces
//! have no parent; a level N space has a parent at level N - 1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::shared::content::{Article, ContentDetail, Flashcard};
use crate::shared::user::UserSummary;

/// Deepest level a space can sit at
pub const MAX_SPACE_LEVEL: i16 = 3;

/// A stored space
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Space {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub banner_url: Option<String>,
    pub level: i16,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Navigation view of a space and its descendants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpaceNode {
    pub id: Uuid,
    pub name: String,
    pub level: i16,
    pub children: Vec<SpaceNode>,
}

impl SpaceNode {
    /// A node without children
    pub fn leaf(space: &Space) -> Self {
        Self {
            id: space.id,
            name: space.name.clone(),
            level: space.level,
            children: Vec::new(),
        }
    }

    /// Ids of this node and every descendant, depth first
    pub fn ids(&self) -> Vec<Uuid> {
        let mut ids = vec![self.id];
        for child in &self.children {
            ids.extend(child.ids());
        }
        ids
    }
}

/// Kind of alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// A user subscribed to a space
    Subscription,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Subscription => "subscription",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "subscription" => Some(AlertKind::Subscription),
            _ => None,
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification about activity in a space
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub id: Uuid,
    pub kind: AlertKind,
    pub message: String,
    pub user_id: Uuid,
    pub space_id: Uuid,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Values the store needs to persist an alert
#[derive(Debug, Clone)]
pub struct NewAlert {
    pub kind: AlertKind,
    pub message: String,
    pub user_id: Uuid,
    pub space_id: Uuid,
}

/// A space with its members, content and the caller's unread alerts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpaceDetail {
    #[serde(flatten)]
    pub space: Space,
    pub subscribers: Vec<UserSummary>,
    pub contributors: Vec<UserSummary>,
    pub articles: Vec<ContentDetail<Article>>,
    pub flashcards: Vec<ContentDetail<Flashcard>>,
    pub alerts: Vec<Alert>,
}

/// Request to toggle a subscription
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub space_id: Option<Uuid>,
}

/// Outcome of a subscription toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionChange {
    Subscribed,
    Unsubscribed,
}

/// Response after toggling a subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub subscribed: bool,
    pub message: String,
}

impl From<SubscriptionChange> for SubscribeResponse {
    fn from(change: SubscriptionChange) -> Self {
        match change {
            SubscriptionChange::Subscribed => SubscribeResponse {
                subscribed: true,
                message: "Successfully subscribed to space".to_string(),
            },
            SubscriptionChange::Unsubscribed => SubscribeResponse {
                subscribed: false,
                message: "Successfully unsubscribed from space".to_string(),
            },
        }
    }
}

/// Response for space list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacesResponse<T> {
    pub spaces: Vec<T>,
}

/// Response for a single space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceResponse {
    pub space: SpaceDetail,
}
