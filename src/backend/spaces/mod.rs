//! Spaces Module
//!
//! Nested spaces (three levels), subscriptions and the read paths that show
//! them.
//!
//! - **`hierarchy`** - Tree building and subscription filtering
//! - **`subscription`** - Subscribe/unsubscribe toggle
//! - **`details`** - Space detail loading
//! - **`handlers`** - HTTP handlers

pub mod hierarchy;

pub mod subscription;

pub mod details;

pub mod handlers;

pub use hierarchy::{build_space_tree, filter_subscribed};
pub use subscription::toggle_subscription;
