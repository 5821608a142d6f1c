//! End-to-end tests for the request authentication flow
//!
//! Every rejection reason must collapse into the same 401 envelope at
//! the HTTP boundary, and a valid bearer token must carry its identity
//! through to the handler.

mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

use common::{authed_get_request, bearer_token, body_json, get_request, test_app, token_service};
use pagemark_catalog::mock::MockCatalog;

#[tokio::test]
async fn test_missing_authorization_header_is_unauthorized() {
    let app = test_app(MockCatalog::new());

    let response = app.oneshot(get_request("/auth/me")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_wrong_scheme_is_unauthorized() {
    let token = bearer_token("u1", "alice");

    for authorization in [
        format!("Basic {token}"),
        format!("bearer {token}"),
        format!("Bearer{token}"),
    ] {
        let app = test_app(MockCatalog::new());
        let response = app
            .oneshot(authed_get_request("/auth/me", &authorization))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "scheme {authorization:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_tampered_token_is_unauthorized() {
    let token = bearer_token("u1", "alice");

    // Flip one character in the payload segment
    let mut segments: Vec<String> = token.split('.').map(String::from).collect();
    let mut payload: Vec<char> = segments[1].chars().collect();
    payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
    segments[1] = payload.into_iter().collect();
    let tampered = segments.join(".");

    let app = test_app(MockCatalog::new());
    let response = app
        .oneshot(authed_get_request("/auth/me", &format!("Bearer {tampered}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    // Negative lifetime puts exp in the past
    let mut claims = pagemark_auth::Claims::new();
    claims.set("sub", "u1");
    let token = token_service(-11).sign(claims);

    let app = test_app(MockCatalog::new());
    let response = app
        .oneshot(authed_get_request("/auth/me", &format!("Bearer {token}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = test_app(MockCatalog::new());
    let response = app
        .oneshot(authed_get_request("/auth/me", "Bearer not.a.token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_without_string_subject_is_unauthorized() {
    use jsonwebtoken::{Algorithm, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct NumericSubject {
        sub: u64,
        exp: i64,
    }

    // Correctly signed, but the subject is not a string
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &NumericSubject {
            sub: 42,
            exp: i64::MAX,
        },
        &EncodingKey::from_secret(common::TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let app = test_app(MockCatalog::new());
    let response = app
        .oneshot(authed_get_request("/auth/me", &format!("Bearer {token}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_reaches_handler_with_identity() {
    let token = bearer_token("u1", "alice");

    let app = test_app(MockCatalog::new());
    let response = app
        .oneshot(authed_get_request("/auth/me", &format!("Bearer {token}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "u1");
    assert_eq!(body["loginId"], "alice");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = test_app(MockCatalog::new());
    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
