//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`get_me`** - GET /api/auth/me - Profile of the authenticated caller

/// Get current user handler
pub mod me;

pub use me::get_me;
