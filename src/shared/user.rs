//! User Data Structures
//!
//! Users are provisioned elsewhere; this service only reads them. Two shapes
//! exist: the full profile returned to the user themself, and the summary
//! embedded in every comment, reaction and piece of content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public identity of a user (no credential or contact fields)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct UserSummary {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub username: String,
}

/// Profile of the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct UserProfile {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Administrator flag
    pub is_admin: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// The summary embedded in content payloads
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// Response for the profile endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}
