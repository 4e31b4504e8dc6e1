/**
 * Session Tokens
 *
 * JWT issuance and verification (HS256). Registration and login live in the
 * account service; this service only needs to verify the bearer tokens it
 * receives, and to issue them for tooling and tests.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::config::{ServerConfig, MAX_TOKEN_TTL_DAYS};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Parse the subject as a user ID
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidSubject(self.sub.clone()))
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid user ID in token: {0}")]
    InvalidSubject(String),
}

/// Issues and verifies session tokens with a shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Lifetimes beyond `MAX_TOKEN_TTL_DAYS` are clamped to it
    pub fn new(secret: &str, ttl_days: u64) -> Self {
        let days = ttl_days.min(MAX_TOKEN_TTL_DAYS) as i64;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(days),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl_days)
    }

    /// Create a token for a user
    pub fn issue(&self, user_id: Uuid, username: &str, email: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            exp: (now + self.ttl).timestamp() as u64,
            iat: now.timestamp() as u64,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", 7)
    }

    #[test]
    fn test_issue_and_verify() {
        let user_id = Uuid::new_v4();
        let token = issuer().issue(user_id, "alice", "alice@example.com").unwrap();

        let claims = issuer().verify(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_verify_invalid_token() {
        assert!(issuer().verify("invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let token = TokenIssuer::new("other-secret", 7)
            .issue(Uuid::new_v4(), "bob", "bob@example.com")
            .unwrap();
        assert!(issuer().verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            username: "carol".to_string(),
            email: "carol@example.com".to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(issuer().verify(&token), Err(TokenError::Jwt(_))));
    }

    #[test]
    fn test_oversized_ttl_is_clamped() {
        let issuer = TokenIssuer::new("test-secret", u64::MAX);
        let token = issuer
            .issue(Uuid::new_v4(), "erin", "erin@example.com")
            .unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(
            claims.exp - claims.iat,
            MAX_TOKEN_TTL_DAYS * 24 * 60 * 60
        );
    }

    #[test]
    fn test_invalid_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            username: "dave".to_string(),
            email: "dave@example.com".to_string(),
            exp: 0,
            iat: 0,
        };
        assert!(matches!(claims.user_id(), Err(TokenError::InvalidSubject(_))));
    }
}
