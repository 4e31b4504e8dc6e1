//! Reactions Module
//!
//! Emoji reactions, at most one per user and target, never edited or removed.

/// Target resolution and uniqueness check
pub mod resolver;

/// HTTP handlers
pub mod handlers;

pub use handlers::create_reaction_handler;
pub use resolver::create_reaction;
