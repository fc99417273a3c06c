use pretty_assertions::assert_eq;

use super::*;
use crate::test_support::StubBackend;

#[tokio::test]
async fn login_returns_token_and_user() {
    let backend = StubBackend::start().await;
    backend.add_user("a@b.com", "hunter2");

    let response = backend
        .client()
        .login(&Credentials::new("a@b.com", "hunter2"))
        .await
        .unwrap();

    assert_eq!(response.token, "token-a@b.com");
    let user = response.user.unwrap();
    assert_eq!(user.id.as_deref(), Some("user-1"));
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
}

#[tokio::test]
async fn wrong_password_maps_to_unauthorized() {
    let backend = StubBackend::start().await;
    backend.add_user("a@b.com", "hunter2");

    let error = backend
        .client()
        .login(&Credentials::new("a@b.com", "wrong"))
        .await
        .unwrap_err();

    assert!(error.is_unauthorized());
}

#[tokio::test]
async fn signup_conflict_surfaces_backend_message() {
    let backend = StubBackend::start().await;
    backend.add_user("taken@b.com", "pw");

    let error = backend
        .client()
        .signup(&Credentials::new("taken@b.com", "pw"))
        .await
        .unwrap_err();

    match error {
        ApiError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "User already exists");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn signup_returns_optional_token() {
    let backend = StubBackend::start().await;

    let response = backend
        .client()
        .signup(&Credentials::new("new@b.com", "pw"))
        .await
        .unwrap();

    assert_eq!(response.token.as_deref(), Some("signup-new@b.com"));
}

#[tokio::test]
async fn create_then_list_includes_new_link() {
    let backend = StubBackend::start().await;
    let token = backend.issue_token("a@b.com");
    backend.seed_link("https://old.example.com/", "", "2024-01-01T10:00:00Z");
    let client = backend.client();

    let created = client
        .create_link(
            &token,
            &CreateLinkRequest {
                url: "https://new.example.com/".to_string(),
                source: Source::Sms,
                category: "ai".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(created.source, Source::Sms);
    assert_eq!(created.category.as_deref(), Some("ai"));

    let links = client.list_links(&token).await.unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].id, created.id);
    assert!(links[1].is_uncategorized());
}

#[tokio::test]
async fn list_links_without_valid_token_is_unauthorized() {
    let backend = StubBackend::start().await;

    let error = backend.client().list_links("stale").await.unwrap_err();
    assert!(matches!(error, ApiError::Unauthorized));
}

#[tokio::test]
async fn blank_token_is_rejected_before_sending() {
    let backend = StubBackend::start().await;

    let error = backend.client().list_links("  ").await.unwrap_err();
    assert!(matches!(error, ApiError::InvalidConfiguration(_)));
}

#[tokio::test]
async fn opt_in_posts_phone_number() {
    let backend = StubBackend::start().await;
    let client = backend.client();

    client.sms_opt_in("+15551234567").await.unwrap();
    assert!(client.sms_opt_in("5551234567").await.is_err());
    assert_eq!(backend.opt_ins(), vec!["+15551234567".to_string()]);
}

#[test]
fn parse_api_error_prefers_json_message() {
    assert_eq!(
        parse_api_error(StatusCode::BAD_REQUEST, r#"{"message":" bad url "}"#),
        "bad url"
    );
    assert_eq!(
        parse_api_error(StatusCode::BAD_GATEWAY, "  "),
        "Bad Gateway"
    );
    assert_eq!(
        parse_api_error(StatusCode::BAD_REQUEST, "plain text"),
        "plain text"
    );
}

#[test]
fn credentials_debug_redacts_password() {
    let rendered = format!("{:?}", Credentials::new("a@b.com", "hunter2"));
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("a@b.com"));
}

#[test]
fn signup_body_that_is_not_json_still_counts_as_success() {
    assert_eq!(decode_signup_body(""), SignupResponse::default());
    assert_eq!(decode_signup_body("Created"), SignupResponse::default());
    assert_eq!(
        decode_signup_body(r#"{"token":"t-1"}"#).token.as_deref(),
        Some("t-1")
    );
}
