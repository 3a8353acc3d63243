//! HTTP-level integration tests for the storefront API
//!
//! The suite runs without a live database; `common` explains how the
//! harness is assembled.

mod common;

mod auth;
mod products;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::PgPool;
use tower::ServiceExt;

use storefront_app::create_app;
use storefront_common::Config;

fn test_app() -> axum::Router {
    let config = Config {
        database_url: common::TEST_DATABASE_URL.to_string(),
        token_secret: common::TEST_SECRET.to_string(),
        token_ttl_secs: 3600,
        log_level: "debug".to_string(),
        rust_log: "storefront=debug".to_string(),
        port: 0,
    };
    let pool = PgPool::connect_lazy(&config.database_url).expect("valid database url");
    create_app(&config, pool)
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/definitely/not/here")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
