//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the HTTP layer, the core algorithms and the storage backends. These types
//! are plain data: they serialize to the JSON wire format and carry the
//! domain invariants (exactly-one targets, fixed emoji set, level caps).
//!
//! # Overview
//!
//! - **`content`** - Articles, flashcards, comments, reactions
//! - **`space`** - Spaces, navigation trees, subscriptions, alerts
//! - **`user`** - User profile and summary
//! - **`error`** - Payload validation errors
//! - **`config`** - Server configuration

/// Content types (articles, flashcards, comments, reactions)
pub mod content;

/// Space hierarchy and subscription types
pub mod space;

/// User types
pub mod user;

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
pub use content::{
    Authored, Comment, CommentNode, CommentTarget, ContentKind, Emoji, Reaction, ReactionTarget,
    ReactionView,
};
pub use error::SharedError;
pub use space::{Alert, AlertKind, Space, SpaceDetail, SpaceNode, SubscriptionChange};
pub use user::{UserProfile, UserSummary};
