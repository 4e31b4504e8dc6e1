//! Authentication test helpers
//!
//! Provides utilities for creating test users and generating tokens.

use uuid::Uuid;

use kspace::backend::auth::TokenIssuer;
use kspace::shared::UserProfile;

/// Secret shared by the test application and the tokens issued here
pub const TEST_JWT_SECRET: &str = "kspace-test-secret";

/// Token issuer matching the test application
pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_JWT_SECRET, 1)
}

/// Generate a test JWT token for a user
pub fn generate_test_token(user: &UserProfile) -> String {
    test_issuer()
        .issue(user.id, &user.username, &user.email)
        .expect("Failed to generate test token")
}

/// Token for a user id the store has never seen
pub fn token_for_unknown_user() -> String {
    test_issuer()
        .issue(Uuid::new_v4(), "ghost", "ghost@example.com")
        .expect("Failed to generate test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
