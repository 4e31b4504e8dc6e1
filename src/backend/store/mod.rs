//! Store Module
//!
//! The data-access boundary consumed by the comment assembler, the hierarchy
//! filter and the write paths. Everything behind it is reached through the
//! `ContentStore` trait, so the core functions never see a database handle.
//!
//! # Implementations
//!
//! - **`PgStore`** - PostgreSQL through sqlx, schema under `migrations/`
//! - **`MemoryStore`** - In-process tables guarded by `tokio::sync::RwLock`,
//!   used when no database is configured and by the test suite
//!
//! Both implementations return rows in insertion order (creation time, then
//! a sequence tiebreak) and both enforce the (user, target) uniqueness of
//! reactions and the (user, space) uniqueness of subscriptions, reporting a
//! violation as `StoreError::ConstraintViolation`. Writes that point at a
//! user, space, comment or content row that does not exist fail with
//! `StoreError::MissingReference`.

use thiserror::Error;
use uuid::Uuid;

use crate::shared::content::CommentTarget;

/// Store trait definition
pub mod traits;

/// PostgreSQL implementation
pub mod postgres;

/// In-memory implementation
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use traits::ContentStore;

/// Errors raised at the data-access boundary
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A write referenced a row that does not exist
    #[error("Missing reference: {0}")]
    MissingReference(String),

    /// A stored row could not be turned into a domain value
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::ConstraintViolation(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::MissingReference(db_err.message().to_string());
            }
        }
        StoreError::Database(err)
    }
}

/// Which comments to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentFilter {
    /// Root comments (no parent) of a piece of content
    TopLevel(CommentTarget),
    /// Direct replies to a comment
    RepliesTo(Uuid),
}
