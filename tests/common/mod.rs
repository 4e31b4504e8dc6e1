//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Seed data builders for users, spaces and content
//! - A test application wired to the in-memory store
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod fixtures;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use fixtures::*;
