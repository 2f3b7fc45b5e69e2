//! Integration tests for user creation

mod common;

use axum::http::StatusCode;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use resqlink_backend::repositories::{HealthCardRepository, UserRepository};
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_gets_default_profile() {
    let app = common::TestApp::new().await;

    let created = app.create_user("Ann", "ann@x.com").await;

    let (status, profile) = app.get(&format!("/profile/{}", created.user_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["user_id"], created.user_id.to_string());
    assert_eq!(profile["bio"], "No bio yet");
    assert_eq!(profile["avatar_url"], "");
    assert_eq!(profile["date_of_birth"], "2000-01-01");
    assert_eq!(profile["gender"], "Other");
    assert_eq!(profile["health_card_id"], created.health_card_id.to_string());
    assert_eq!(profile["health_card"]["blood_group"], "Unknown");
    assert_eq!(profile["health_card"]["allergies"], "None");
    assert_eq!(profile["health_card"]["medical_conditions"], "None");
    assert_eq!(profile["health_card"]["emergency_contact"], "0000000000");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_persists_rows() {
    let app = common::TestApp::new().await;
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();

    let created = app.create_user(&name, &email).await;

    let user = UserRepository::find_by_id(&app.pool, created.user_id)
        .await
        .unwrap()
        .expect("user row");
    assert_eq!(user.name.as_deref(), Some(name.as_str()));
    assert_eq!(user.email.as_deref(), Some(email.as_str()));

    let card = HealthCardRepository::find_by_id(&app.pool, created.health_card_id)
        .await
        .unwrap();
    assert!(card.is_some());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_ids_are_fresh() {
    let app = common::TestApp::new().await;
    let mut user_ids = HashSet::new();
    let mut card_ids = HashSet::new();

    for _ in 0..5 {
        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        let created = app.create_user(&name, &email).await;
        user_ids.insert(created.user_id);
        card_ids.insert(created.health_card_id);
    }

    assert_eq!(user_ids.len(), 5);
    assert_eq!(card_ids.len(), 5);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_without_fields_is_accepted() {
    let app = common::TestApp::new().await;

    let (status, body) = app.post("/user", &json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["user_id"].is_string());
    assert!(body["health_card_id"].is_string());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_in_atomic_mode() {
    let app = common::TestApp::atomic().await;

    let created = app.create_user("Ann", "ann@x.com").await;

    let (status, profile) = app.get(&format!("/profile/{}", created.user_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["health_card"]["id"], created.health_card_id.to_string());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_failed_create_user_leaves_user_behind() {
    let app = common::TestApp::new().await;
    app.install_profile_rejection().await;
    let name = format!("{} {}", common::REJECTED_NAME_PREFIX, Uuid::new_v4());

    let (status, body) = app
        .post("/user", &json!({ "name": name, "email": "partial@x.com" }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("profile insert rejected"));
    assert_eq!(app.user_count(&name).await, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_failed_create_user_rolls_back_in_atomic_mode() {
    let app = common::TestApp::atomic().await;
    app.install_profile_rejection().await;
    let name = format!("{} {}", common::REJECTED_NAME_PREFIX, Uuid::new_v4());

    let (status, body) = app
        .post("/user", &json!({ "name": name, "email": "rollback@x.com" }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("profile insert rejected"));
    assert_eq!(app.user_count(&name).await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_without_json_content_type() {
    let app = common::TestApp::new().await;

    let (status, body) = app.post_raw("/user", "name=Ann&email=ann@x.com").await;

    assert_eq!(status, StatusCode::OK);
    let user_id: Uuid = body["user_id"].as_str().unwrap().parse().unwrap();
    let user = UserRepository::find_by_id(&app.pool, user_id)
        .await
        .unwrap()
        .expect("user row");
    assert!(user.name.is_none());
    assert!(user.email.is_none());
}
