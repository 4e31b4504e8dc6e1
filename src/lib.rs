//! KSpace - Main Library
//!
//! KSpace is the REST backend of a hierarchical knowledge-sharing
//! application. Users organize articles and flashcards into nested spaces,
//! subscribe to spaces, discuss content in threaded comments and react with a
//! fixed set of emojis.
//!
//! # Overview
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared by every layer
//!   - Spaces, articles, flashcards, comments, reactions, alerts
//!   - Tagged comment and reaction targets
//!   - Configuration and validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with bearer-token authentication
//!   - Threaded comment assembly and space hierarchy filtering
//!   - Comment, reaction and subscription write paths
//!   - Storage behind the `ContentStore` trait (PostgreSQL or in-memory)
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server build (enabled by default)
//!   - Includes Axum server, JWT verification, tracing subscriber
//!
//! # Usage
//!
//! ```rust,no_run
//! use kspace::backend::server::init::create_app;
//! use kspace::shared::ServerConfig;
//!
//! # async fn example() {
//! let app = create_app(ServerConfig::default()).await;
//! // Serve with axum::serve
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Shared Types**: Plain data that serializes to the JSON wire format
//! - **Core**: Recursive thread assembly and tree filtering over the store
//! - **Store**: Async trait with a sqlx implementation and an in-memory one
//! - **HTTP**: Thin axum handlers translating payloads and errors

pub mod shared;

#[cfg(feature = "ssr")]
pub mod backend;
