//! Authentication Module
//!
//! Session tokens and the profile endpoint. Accounts are provisioned by a
//! separate service, so there is no signup or login here: a request is
//! authenticated by a bearer token signed with the shared `JWT_SECRET`.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - JWT issuance and verification
//! └── handlers/       - HTTP handlers
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Security
//!
//! - Tokens are HS256 JWTs carrying user id, username and email
//! - Tokens expire after `JWT_EXPIRES_IN_DAYS` (7 by default)
//! - Every failure returns 401 without saying which check failed

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::get_me;
pub use sessions::{Claims, TokenError, TokenIssuer};
