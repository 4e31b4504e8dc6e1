/**
 * Server Configuration
 *
 * This module turns a `ServerConfig` into the runtime services the server
 * needs, focusing on the optional PostgreSQL connection.
 *
 * # Error Handling
 *
 * Database problems are logged but do not prevent server startup. Without a
 * reachable database the server runs on the in-memory store.
 */

use sqlx::PgPool;
use std::sync::Arc;

use crate::backend::store::{ContentStore, MemoryStore, PgStore};
use crate::shared::config::ServerConfig;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Connect to PostgreSQL and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is reachable
/// - `None` if no URL is configured or the connection fails
pub async fn load_database(database_url: Option<&str>) -> DatabaseConfig {
    let database_url = match database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to the in-memory store.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

/// Pick the store implementation for this configuration
pub async fn load_store(config: &ServerConfig) -> Arc<dyn ContentStore> {
    match load_database(config.database_url.as_deref()).await {
        Some(pool) => Arc::new(PgStore::new(pool)),
        None => Arc::new(MemoryStore::new()),
    }
}
