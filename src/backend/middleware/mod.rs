//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token verification for every `/api` route
//! - **`extract`** - `JsonBody` and `PathParam`, body and path extractors
//!   that reject with `BackendError`
//!
//! # Example
//!
//! ```rust,no_run
//! use kspace::backend::middleware::{auth_middleware, AuthUser};
//!
//! async fn handler(AuthUser(user): AuthUser) -> String {
//!     user.username
//! }
//! ```

pub mod auth;
pub mod extract;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use extract::{JsonBody, PathParam};
