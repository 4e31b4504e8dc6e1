//! Reaction endpoint tests

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use common::TestApp;

const REACTIONS: &str = "/api/content/reactions";

#[tokio::test]
async fn test_react_to_article() {
    let app = TestApp::new().await;

    let response = app
        .post(REACTIONS, json!({ "emoji": "🔥", "article_id": app.article.id }))
        .await;

    assert_status!(response, StatusCode::CREATED);
    let reaction = &response.1["reaction"];
    assert_eq!(reaction["emoji"], "🔥");
    assert_eq!(reaction["target_type"], "article");
    assert_eq!(reaction["target_id"], app.article.id.to_string());
    assert_eq!(reaction["user_id"], app.user.id.to_string());
    assert_eq!(reaction["user"]["username"], "alice");
}

#[tokio::test]
async fn test_second_reaction_from_same_user_conflicts() {
    let app = TestApp::new().await;
    let body = json!({ "emoji": "🎉", "article_id": app.article.id });

    let first = app.post(REACTIONS, body).await;
    assert_status!(first, StatusCode::CREATED);

    // A different emoji still counts as a second reaction
    let second = app
        .post(REACTIONS, json!({ "emoji": "🤘", "article_id": app.article.id }))
        .await;
    assert_error_message!(
        second,
        StatusCode::CONFLICT,
        "You have already reacted to this article"
    );
    assert_eq!(app.store.reaction_count().await, 1);

    let (_, bob_token) = app.add_user("bob").await;
    let other_user = app
        .post_as(&bob_token, REACTIONS, json!({ "emoji": "🤘", "article_id": app.article.id }))
        .await;
    assert_status!(other_user, StatusCode::CREATED);
    assert_eq!(app.store.reaction_count().await, 2);
}

#[tokio::test]
async fn test_reaction_on_comment_shows_in_thread() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post("/api/content/comments", json!({ "text": "nice", "article_id": app.article.id }))
        .await;
    let comment_id = created["comment"]["id"].as_str().unwrap().to_string();

    let response = app
        .post(REACTIONS, json!({ "emoji": "🎉", "comment_id": comment_id }))
        .await;
    assert_status!(response, StatusCode::CREATED);

    let duplicate = app
        .post(REACTIONS, json!({ "emoji": "🎉", "comment_id": comment_id }))
        .await;
    assert_status!(duplicate, StatusCode::CONFLICT);

    let (_, thread) = app
        .get(&format!("/api/content/article/{}/comments", app.article.id))
        .await;
    let reactions = thread["comments"][0]["reactions"].as_array().unwrap();
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0]["emoji"], "🎉");
}

#[tokio::test]
async fn test_react_to_alert() {
    let app = TestApp::new().await;

    let subscribed = app
        .post("/api/spaces/subscribe", json!({ "space_id": app.space.id }))
        .await;
    assert_status!(subscribed, StatusCode::OK);

    let alerts = app.store.alerts_for(app.user.id).await;
    assert_eq!(alerts.len(), 1);

    let response = app
        .post(REACTIONS, json!({ "emoji": "🤘", "alert_id": alerts[0].id }))
        .await;
    assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.1["reaction"]["target_type"], "alert");
}

#[tokio::test]
async fn test_reaction_validation() {
    let app = TestApp::new().await;

    let bad_emoji = app
        .post(REACTIONS, json!({ "emoji": "👍", "article_id": app.article.id }))
        .await;
    assert_status!(bad_emoji, StatusCode::BAD_REQUEST);
    assert_contains!(bad_emoji.1["error"].as_str().unwrap(), "🔥");

    let no_emoji = app.post(REACTIONS, json!({ "article_id": app.article.id })).await;
    assert_status!(no_emoji, StatusCode::BAD_REQUEST);

    let no_target = app.post(REACTIONS, json!({ "emoji": "🔥" })).await;
    assert_status!(no_target, StatusCode::BAD_REQUEST);

    let two_targets = app
        .post(
            REACTIONS,
            json!({ "emoji": "🔥", "article_id": app.article.id, "comment_id": Uuid::new_v4() }),
        )
        .await;
    assert_status!(two_targets, StatusCode::BAD_REQUEST);

    let missing = app
        .post(REACTIONS, json!({ "emoji": "🔥", "flashcard_id": Uuid::new_v4() }))
        .await;
    assert_status!(missing, StatusCode::NOT_FOUND);

    assert_eq!(app.store.reaction_count().await, 0);
}

#[tokio::test]
async fn test_malformed_target_id_uses_error_shape() {
    let app = TestApp::new().await;

    let response = app
        .post(REACTIONS, json!({ "emoji": "🔥", "article_id": "not-a-uuid" }))
        .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.1["status"], 400);
    assert!(response.1["error"].is_string());
    assert_eq!(app.store.reaction_count().await, 0);
}
