//! Backend Module
//!
//! This module contains all server-side code for KSpace. It provides an
//! Axum HTTP server for learning spaces, threaded comments and reactions.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`store`** - Persistence seam (`ContentStore`) with PostgreSQL and in-memory backends
//! - **`comments`** - Comment creation rules and thread assembly
//! - **`reactions`** - Reaction creation and duplicate detection
//! - **`spaces`** - Space hierarchy, subscriptions and detail loading
//! - **`auth`** - JWT tokens and the profile endpoint
//! - **`middleware`** - Bearer-token authentication
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── store/          - Storage trait and implementations
//! ├── comments/       - Comment threads
//! ├── reactions/      - Emoji reactions
//! ├── spaces/         - Space hierarchy and subscriptions
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the store behind `Arc<dyn ContentStore>` and the token
//! issuer. Handlers pull either piece out with `State<...>` via `FromRef`.
//!
//! # Example
//!
//! ```rust,no_run
//! use kspace::backend::server::create_app;
//! use kspace::shared::ServerConfig;
//!
//! # async fn example() {
//! let config = ServerConfig::from_env().expect("valid configuration");
//! let app = create_app(config).await;
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Storage layer
pub mod store;

/// Comment threads
pub mod comments;

/// Emoji reactions
pub mod reactions;

/// Spaces, hierarchy and subscriptions
pub mod spaces;

/// Backend error types
pub mod error;

/// Authentication
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, create_app_with_store, AppState};
pub use store::{ContentStore, MemoryStore, PgStore};
