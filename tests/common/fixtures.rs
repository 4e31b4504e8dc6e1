//! Test fixtures
//!
//! Seed data builders and a `TestApp` that drives the full router against a
//! `MemoryStore` with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use kspace::backend::server::create_app_with_store;
use kspace::backend::store::{ContentStore, MemoryStore};
use kspace::shared::content::{Article, Flashcard};
use kspace::shared::{ServerConfig, Space, UserProfile};

use super::auth_helpers::{auth_header, generate_test_token, TEST_JWT_SECRET};

pub fn user(username: &str) -> UserProfile {
    let now = Utc::now();
    UserProfile {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        is_admin: false,
        created_at: now,
        updated_at: now,
    }
}

/// A space one level below `parent`, or a root space
pub fn space(name: &str, parent: Option<&Space>) -> Space {
    Space {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: format!("All about {}", name),
        banner_url: None,
        level: parent.map_or(1, |p| p.level + 1),
        parent_id: parent.map(|p| p.id),
        created_at: Utc::now(),
    }
}

pub fn article(author: &UserProfile, space: &Space, title: &str) -> Article {
    Article {
        id: Uuid::new_v4(),
        title: title.to_string(),
        text: format!("{} explained", title),
        author_id: author.id,
        space_id: space.id,
        created_at: Utc::now() - Duration::minutes(5),
    }
}

pub fn flashcard(author: &UserProfile, space: &Space, title: &str) -> Flashcard {
    Flashcard {
        id: Uuid::new_v4(),
        title: title.to_string(),
        short_description: format!("{} in brief", title),
        long_description: format!("{} in depth", title),
        author_id: author.id,
        space_id: space.id,
        created_at: Utc::now() - Duration::minutes(5),
    }
}

/// Full application over a seeded in-memory store
///
/// Seeds one user (`alice`), one root space (`Rust`) and one article
/// (`Ownership`) in it.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub user: UserProfile,
    pub token: String,
    pub space: Space,
    pub article: Article,
}

impl TestApp {
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());

        let user = user("alice");
        let space = space("Rust", None);
        let article = article(&user, &space, "Ownership");

        store.insert_user(user.clone()).await;
        store.insert_space(space.clone()).await;
        store.insert_article(article.clone()).await;

        let config = ServerConfig::builder()
            .jwt_secret(TEST_JWT_SECRET)
            .token_ttl_days(1)
            .build()
            .expect("valid test configuration");
        let shared: Arc<dyn ContentStore> = store.clone();
        let router = create_app_with_store(&config, shared);
        let token = generate_test_token(&user);

        Self {
            router,
            store,
            user,
            token,
            space,
            article,
        }
    }

    /// Seed another user and return their token
    pub async fn add_user(&self, username: &str) -> (UserProfile, String) {
        let other = user(username);
        self.store.insert_user(other.clone()).await;
        let token = generate_test_token(&other);
        (other, token)
    }

    /// Send a request with an optional bearer token and JSON body
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    /// GET as the seeded user
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(&self.token), None).await
    }

    /// POST as the seeded user
    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(&self.token), Some(body)).await
    }

    /// POST as another user
    pub async fn post_as(&self, token: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }
}
