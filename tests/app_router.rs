mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use shorturl_service::routes::{AssetDirs, app_router};
use tower::ServiceExt;

fn assets() -> AssetDirs {
    let root = env!("CARGO_MANIFEST_DIR");
    AssetDirs::new(format!("{root}/public"), format!("{root}/views"))
}

async fn send(request: Request<Body>) -> Response {
    let (state, _repo) = common::create_test_state();
    app_router(state, &assets()).oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_index_page_is_served() {
    let response = send(get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert!(body_text(response).await.contains("/api/shorturl"));
}

#[tokio::test]
async fn test_public_asset_is_served() {
    let response = send(get("/public/style.css")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/css"));
}

#[tokio::test]
async fn test_missing_public_asset_is_404() {
    let response = send(get("/public/does-not-exist.js")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let response = send(get("/api/hello/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, r#"{"greeting":"hello API"}"#);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let request = Request::builder()
        .uri("/api/hello")
        .header(header::ORIGIN, "https://client.example")
        .body(Body::empty())
        .unwrap();

    let response = send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_full_stack_shorten_and_redirect() {
    let (state, _repo) = common::create_test_state();
    let app = app_router(state, &assets());

    let create = Request::builder()
        .method("POST")
        .uri("/api/shorturl")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("url=https%3A%2F%2Fexample.com%2Fdocs"))
        .unwrap();
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        r#"{"original_url":"https://example.com/docs","short_url":1}"#
    );

    let response = app.oneshot(get("/api/shorturl/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/docs"
    );
}
