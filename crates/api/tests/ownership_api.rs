//! HTTP-level integration tests for the photo, comment and social media
//! resources: envelopes, ownership enforcement and list enrichment.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{
    body_json, build_test_app, delete_auth, get_auth, post_json_auth, put_json_auth, signup,
};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_photo(app: &Router, token: &str, title: &str) -> Value {
    let body = json!({
        "title": title,
        "caption": "first light",
        "photo_url": format!("https://img.test/{title}.png"),
    });
    let response = post_json_auth(app.clone(), "/api/v1/photos", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

async fn create_comment(app: &Router, token: &str, photo_id: i64, message: &str) -> Value {
    let body = json!({ "message": message, "photo_id": photo_id });
    let response = post_json_auth(app.clone(), "/api/v1/comments", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

async fn list(app: &Router, token: &str, kind: &str) -> Vec<Value> {
    let response = get_auth(app.clone(), &format!("/api/v1/{kind}"), token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]
        .as_array()
        .cloned()
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_then_list_includes_owner_summary() {
    let app = build_test_app();
    let (ana_id, token) = signup(&app, "ana").await;

    let photo = create_photo(&app, &token, "sunset").await;
    assert_eq!(photo["user_id"], ana_id);
    assert_eq!(photo["caption"], "first light");

    let photos = list(&app, &token, "photos").await;
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0]["id"], photo["id"]);
    assert_eq!(photos[0]["title"], "sunset");
    assert_eq!(
        photos[0]["user"],
        json!({ "id": ana_id, "username": "ana", "email": "ana@test.com" })
    );
}

#[tokio::test]
async fn test_create_photo_validation() {
    let app = build_test_app();
    let (_, token) = signup(&app, "ana").await;

    let body = json!({ "title": "", "photo_url": "not a url" });
    let response = post_json_auth(app, "/api/v1/photos", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let msg = body_json(response).await["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(msg.contains("title is required"), "{msg}");
    assert!(msg.contains("photo_url must be a valid URL"), "{msg}");
}

#[tokio::test]
async fn test_photo_update_keeps_blank_title_and_url() {
    let app = build_test_app();
    let (_, token) = signup(&app, "ana").await;
    let photo = create_photo(&app, &token, "sunset").await;
    let id = photo["id"].as_i64().unwrap();

    let patch = json!({ "title": "", "photo_url": "", "caption": "x" });
    let response = put_json_auth(app, &format!("/api/v1/photos/{id}"), patch, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["title"], "sunset");
    assert_eq!(data["photo_url"], photo["photo_url"]);
    assert_eq!(data["caption"], "x");
    assert_eq!(data["created_at"], photo["created_at"]);
}

#[tokio::test]
async fn test_foreign_user_gets_403_not_404() {
    let app = build_test_app();
    let (_, ana) = signup(&app, "ana").await;
    let (_, bob) = signup(&app, "bob").await;
    let photo = create_photo(&app, &ana, "sunset").await;
    let uri = format!("/api/v1/photos/{}", photo["id"]);

    let response = put_json_auth(app.clone(), &uri, json!({ "caption": "mine" }), &bob).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["error"],
        "This resource is not yours."
    );

    let response = delete_auth(app.clone(), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Still there, untouched.
    let photos = list(&app, &ana, "photos").await;
    assert_eq!(photos[0]["caption"], "first light");
}

#[tokio::test]
async fn test_delete_photo_then_again_is_404() {
    let app = build_test_app();
    let (_, ana) = signup(&app, "ana").await;
    let (_, bob) = signup(&app, "bob").await;
    let photo = create_photo(&app, &ana, "sunset").await;
    let uri = format!("/api/v1/photos/{}", photo["id"]);

    let response = delete_auth(app.clone(), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app.clone(), &uri, &ana).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Your photo has been successfully deleted"
    );

    let response = delete_auth(app.clone(), &uri, &ana).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        format!("Photo with id {} not found", photo["id"])
    );
}

#[tokio::test]
async fn test_absent_id_is_404_for_anyone() {
    let app = build_test_app();
    let (_, token) = signup(&app, "ana").await;

    let response = put_json_auth(
        app.clone(),
        "/api/v1/comments/999",
        json!({ "message": "y" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, "/api/v1/socialmedias/999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_400() {
    let app = build_test_app();
    let (_, token) = signup(&app, "ana").await;

    let response = delete_auth(app, "/api/v1/photos/abc", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_comment_list_embeds_owner_and_photo() {
    let app = build_test_app();
    let (ana_id, ana) = signup(&app, "ana").await;
    let (bob_id, bob) = signup(&app, "bob").await;
    let photo = create_photo(&app, &ana, "sunset").await;
    let photo_id = photo["id"].as_i64().unwrap();

    create_comment(&app, &bob, photo_id, "nice").await;
    create_comment(&app, &ana, photo_id, "thanks").await;

    let comments = list(&app, &ana, "comments").await;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["message"], "nice");
    assert_eq!(comments[0]["user"]["id"], bob_id);
    assert_eq!(comments[1]["user"]["id"], ana_id);
    assert_eq!(comments[0]["photo"]["id"], photo_id);
    assert_eq!(comments[0]["photo"]["title"], "sunset");
}

#[tokio::test]
async fn test_comment_on_missing_photo_is_400() {
    let app = build_test_app();
    let (_, token) = signup(&app, "ana").await;

    let body = json!({ "message": "hello", "photo_id": 42 });
    let response = post_json_auth(app, "/api/v1/comments", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_comment_update_overwrites_message() {
    let app = build_test_app();
    let (_, ana) = signup(&app, "ana").await;
    let photo = create_photo(&app, &ana, "sunset").await;
    let comment = create_comment(&app, &ana, photo["id"].as_i64().unwrap(), "x").await;
    let uri = format!("/api/v1/comments/{}", comment["id"]);

    let response = put_json_auth(app.clone(), &uri, json!({ "message": "y" }), &ana).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["message"], "y");

    let response = put_json_auth(app, &uri, json!({ "message": "" }), &ana).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleting_photo_keeps_other_users_comments() {
    let app = build_test_app();
    let (_, ana) = signup(&app, "ana").await;
    let (bob_id, bob) = signup(&app, "bob").await;
    let photo = create_photo(&app, &ana, "sunset").await;
    let comment = create_comment(&app, &bob, photo["id"].as_i64().unwrap(), "nice").await;

    let uri = format!("/api/v1/photos/{}", photo["id"]);
    let response = delete_auth(app.clone(), &uri, &ana).await;
    assert_eq!(response.status(), StatusCode::OK);

    let comments = list(&app, &bob, "comments").await;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["id"], comment["id"]);
    assert_eq!(comments[0]["user"]["id"], bob_id);
    assert!(comments[0]["photo_id"].is_null());
    assert!(comments[0]["photo"].is_null());

    // Still bob's to edit, and nobody else's.
    let uri = format!("/api/v1/comments/{}", comment["id"]);
    let response = put_json_auth(app.clone(), &uri, json!({ "message": "still here" }), &ana).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let response = put_json_auth(app, &uri, json!({ "message": "still here" }), &bob).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["message"], "still here");
}

// ---------------------------------------------------------------------------
// Social medias
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_social_media_crud() {
    let app = build_test_app();
    let (ana_id, ana) = signup(&app, "ana").await;

    let body = json!({ "name": "blog", "social_media_url": "https://ana.test" });
    let response = post_json_auth(app.clone(), "/api/v1/socialmedias", body, &ana).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    let uri = format!("/api/v1/socialmedias/{}", created["id"]);

    let patch = json!({ "name": "site", "social_media_url": "https://ana.example" });
    let response = put_json_auth(app.clone(), &uri, patch, &ana).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["name"], "site");
    assert_eq!(updated["social_media_url"], "https://ana.example");

    let items = list(&app, &ana, "socialmedias").await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["user"]["id"], ana_id);

    let response = delete_auth(app.clone(), &uri, &ana).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Your social media has been successfully deleted"
    );
    assert!(list(&app, &ana, "socialmedias").await.is_empty());
}

#[tokio::test]
async fn test_social_media_requires_both_fields() {
    let app = build_test_app();
    let (_, ana) = signup(&app, "ana").await;

    let body = json!({ "name": "blog" });
    let response = post_json_auth(app, "/api/v1/socialmedias", body, &ana).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Account deletion and orphans
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_deleted_owner_leaves_orphans_listed_with_null_user() {
    let app = build_test_app();
    let (_, ana) = signup(&app, "ana").await;
    let (_, bob) = signup(&app, "bob").await;
    let photo = create_photo(&app, &ana, "sunset").await;

    let response = delete_auth(app.clone(), "/api/v1/users", &ana).await;
    assert_eq!(response.status(), StatusCode::OK);

    let photos = list(&app, &bob, "photos").await;
    assert_eq!(photos.len(), 1);
    assert!(photos[0]["user"].is_null());
    assert!(photos[0]["user_id"].is_null());

    // Nobody owns it any more, so nobody may change it.
    let uri = format!("/api/v1/photos/{}", photo["id"]);
    let response = put_json_auth(app, &uri, json!({ "caption": "claim" }), &bob).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
