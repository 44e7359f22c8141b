mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::common::TestApp;

#[tokio::test]
async fn register_login_and_me_flow() {
    let app = TestApp::new();
    let user = app.register_and_login().await;

    let (status, me_json) = app.get_json("/me", Some(&user.access_token)).await;
    assert_eq!(status, StatusCode::OK);

    let expected_id = user.id.to_string();
    assert_eq!(
        me_json.get("id").and_then(Value::as_str),
        Some(expected_id.as_str())
    );
    assert_eq!(
        me_json.get("email").and_then(Value::as_str),
        Some(user.email.as_str())
    );
    assert_eq!(
        me_json.get("auth_method").and_then(Value::as_str),
        Some("local")
    );
    assert!(me_json.get("password_hash").is_none());
}

#[tokio::test]
async fn notes_created_after_login_belong_to_the_user() {
    let app = TestApp::new();
    let user = app.register_and_login().await;

    let (status, note) = app
        .post_json(
            "/notes",
            json!({ "title": "first", "content": "hello" }),
            Some(&user.access_token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let expected_owner = user.id.to_string();
    assert_eq!(
        note.get("owner").and_then(Value::as_str),
        Some(expected_owner.as_str())
    );
}

#[tokio::test]
async fn register_with_same_email_returns_conflict() {
    let app = TestApp::new();

    let (status, _) = app
        .post_json(
            "/auth/register",
            json!({
                "name": "Same",
                "email": "same-user@example.test",
                "password": "password-123"
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // emails are compared case-insensitively
    let (status, error_json) = app
        .post_json(
            "/auth/register",
            json!({
                "name": "Same Again",
                "email": "  Same-User@Example.test ",
                "password": "password-123"
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        error_json.get("error").and_then(Value::as_str),
        Some("EMAIL_TAKEN")
    );
}

#[tokio::test]
async fn register_validates_payload() {
    let app = TestApp::new();

    for body in [
        json!({ "name": " ", "email": "a@example.test", "password": "password-123" }),
        json!({ "name": "A", "email": "not-an-email", "password": "password-123" }),
        json!({ "name": "A", "email": "a@example.test", "password": "short" }),
        json!({ "email": "a@example.test", "password": "password-123" }),
    ] {
        let (status, error_json) = app.post_json("/auth/register", body.clone(), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body} accepted");
        assert_eq!(
            error_json.get("error").and_then(Value::as_str),
            Some("BAD_REQUEST")
        );
    }
}

#[tokio::test]
async fn login_with_wrong_password_returns_unauthorized() {
    let app = TestApp::new();
    let email = "wrong-password@example.test";

    let (status, _) = app
        .post_json(
            "/auth/register",
            json!({
                "name": "Wrong",
                "email": email,
                "password": "correct-password"
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error_json) = app
        .post_json(
            "/auth/login",
            json!({
                "email": email,
                "password": "wrong-password"
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        error_json.get("error").and_then(Value::as_str),
        Some("UNAUTHORIZED")
    );

    let (status, _) = app
        .post_json(
            "/auth/login",
            json!({
                "email": "nobody@example.test",
                "password": "correct-password"
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
