//! Server configuration module
//!
//! Provides the configuration consumed by the backend at startup. Values come
//! from the process environment (optionally seeded from a `.env` file) and can
//! also be assembled programmatically through [`ServerConfigBuilder`].

use thiserror::Error;

/// Development-only signing secret used when `JWT_SECRET` is not provided
pub const DEV_JWT_SECRET: &str = "kspace-development-secret";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3001;

/// Default token lifetime in days
pub const DEFAULT_TOKEN_TTL_DAYS: u64 = 7;

/// Longest token lifetime accepted, in days (about ten years)
pub const MAX_TOKEN_TTL_DAYS: u64 = 3650;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP listener binds to
    pub port: u16,
    /// PostgreSQL connection string; `None` runs against the in-memory store
    pub database_url: Option<String>,
    /// HMAC secret for access tokens
    pub jwt_secret: String,
    /// Access token lifetime in days
    pub token_ttl_days: u64,
    /// Allow any origin on cross-origin requests
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// | Variable | Meaning | Default |
    /// |---|---|---|
    /// | `SERVER_PORT` | listener port | 3001 |
    /// | `DATABASE_URL` | PostgreSQL URL | unset (in-memory store) |
    /// | `JWT_SECRET` | token signing secret | development secret |
    /// | `JWT_EXPIRES_IN_DAYS` | token lifetime | 7 |
    /// | `CORS_PERMISSIVE` | allow any origin | true |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(port) = std::env::var("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", port.clone()))?;
            builder = builder.port(port);
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.trim().is_empty() {
                builder = builder.database_url(url);
            }
        }

        match std::env::var("JWT_SECRET") {
            Ok(secret) => builder = builder.jwt_secret(secret),
            Err(_) => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
            }
        }

        if let Ok(days) = std::env::var("JWT_EXPIRES_IN_DAYS") {
            let days = days
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRES_IN_DAYS", days.clone()))?;
            builder = builder.token_ttl_days(days);
        }

        if let Ok(flag) = std::env::var("CORS_PERMISSIVE") {
            builder = builder.cors_permissive(matches!(flag.as_str(), "1" | "true" | "yes"));
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl_days == 0 || self.token_ttl_days > MAX_TOKEN_TTL_DAYS {
            return Err(ConfigError::InvalidValue(
                "JWT_EXPIRES_IN_DAYS",
                self.token_ttl_days.to_string(),
            ));
        }
        if let Some(url) = &self.database_url {
            if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_days: Option<u64>,
    cors_permissive: Option<bool>,
}

impl ServerConfigBuilder {
    /// Set the listener port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime in days
    pub fn token_ttl_days(mut self, days: u64) -> Self {
        self.token_ttl_days = Some(days);
        self
    }

    /// Allow or restrict cross-origin requests
    pub fn cors_permissive(mut self, permissive: bool) -> Self {
        self.cors_permissive = Some(permissive);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();
        let config = ServerConfig {
            port: self.port.unwrap_or(defaults.port),
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            token_ttl_days: self.token_ttl_days.unwrap_or(defaults.token_ttl_days),
            cors_permissive: self.cors_permissive.unwrap_or(defaults.cors_permissive),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
