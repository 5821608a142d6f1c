//! End-to-end tests for the public book proxy endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, get_request, test_app};
use pagemark_catalog::mock::MockCatalog;
use pagemark_catalog::{BookSearchItem, BookSearchPage};

#[tokio::test]
async fn test_search_requires_query() {
    let app = test_app(MockCatalog::new());
    let response = app.oneshot(get_request("/books/search")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_search_rejects_blank_query() {
    let app = test_app(MockCatalog::new());
    let response = app
        .oneshot(get_request("/books/search?query=%20%20"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_rejects_non_positive_paging() {
    for uri in ["/books/search?query=dune&start=0", "/books/search?query=dune&display=-1"] {
        let app = test_app(MockCatalog::new());
        let response = app.oneshot(get_request(uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "uri {uri} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_search_passes_through_catalog_page() {
    let catalog = MockCatalog::new();
    catalog.insert_search_page(
        "left hand of darkness",
        BookSearchPage {
            last_build_date: "Mon, 01 Jan 2024 00:00:00 +0900".to_string(),
            total: 1,
            start: 1,
            display: 10,
            items: vec![BookSearchItem {
                title: "The Left Hand of Darkness".to_string(),
                author: "Ursula K. Le Guin".to_string(),
                isbn: "9780441478125".to_string(),
                ..Default::default()
            }],
        },
    );

    let app = test_app(catalog);
    let response = app
        .oneshot(get_request(
            "/books/search?query=left%20hand%20of%20darkness",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert!(body.get("lastBuildDate").is_some());
    assert_eq!(body["items"][0]["title"], "The Left Hand of Darkness");
}

#[tokio::test]
async fn test_lookup_rejects_malformed_isbn() {
    for uri in ["/books/12345", "/books/not-an-isbn", "/books/978044147812X"] {
        let app = test_app(MockCatalog::new());
        let response = app.oneshot(get_request(uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "uri {uri} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_lookup_unknown_isbn_is_not_found() {
    let app = test_app(MockCatalog::new());
    let response = app
        .oneshot(get_request("/books/9780441478125"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lookup_passes_through_catalog_document() {
    let catalog = MockCatalog::new();
    catalog.insert_lookup(
        "9780441478125",
        json!({"item": [{"title": "The Left Hand of Darkness", "itemPage": 304}]}),
    );

    let app = test_app(catalog);
    let response = app
        .oneshot(get_request("/books/9780441478125"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["item"][0]["itemPage"], 304);
}
