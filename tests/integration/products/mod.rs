//! Product route guard tests
//!
//! Product reads are public; mutations sit behind the login guard, which
//! rejects with an empty-body 403 before the request body is even read.
//! CRUD round trips against real rows live with the repositories and
//! need a database.

use axum::body::Body;
use axum::http::{header::AUTHORIZATION, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{body_json, TestApp};

fn product_request(method: Method, uri: &str, auth: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(value) = auth {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(body).unwrap()
}

mod test_mutation_guards {
    use super::*;

    #[tokio::test]
    async fn test_create_without_auth_is_forbidden() {
        let app = TestApp::new();

        let body = Body::from(json!({ "title": "Wireless Mouse", "price": "19.99" }).to_string());
        let request = product_request(Method::POST, "/products", None, body);

        let response = app.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty(), "403 responses carry no body");
    }

    #[tokio::test]
    async fn test_create_with_invalid_token_is_forbidden() {
        let app = TestApp::new();

        let body = Body::from(json!({ "title": "Wireless Mouse", "price": "19.99" }).to_string());
        let request = product_request(Method::POST, "/products", Some("Bearer junk"), body);

        let response = app.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_update_without_auth_is_forbidden() {
        let app = TestApp::new();

        let body = Body::from(json!({ "title": "Renamed" }).to_string());
        let request = product_request(Method::PATCH, "/products/1", None, body);

        let response = app.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_delete_without_auth_is_forbidden() {
        let app = TestApp::new();

        let request = product_request(Method::DELETE, "/products/1", None, Body::empty());

        let response = app.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_guard_runs_before_body_validation() {
        let app = TestApp::new();

        // Invalid caller and invalid payload: the guard answers first
        let body = Body::from(json!({ "title": "", "price": "-5" }).to_string());
        let request = product_request(Method::POST, "/products", Some("Bearer junk"), body);

        let response = app.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_valid_caller_reaches_validation() {
        let app = TestApp::new();
        app.seed_subject(1, "seller@example.com");
        let header = format!("Bearer {}", app.token_for(1));

        let body = Body::from(json!({ "title": "Wireless Mouse", "price": "-5" }).to_string());
        let request = product_request(Method::POST, "/products", Some(&header), body);

        let response = app.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json_body = body_json(response).await;
        assert_eq!(json_body["error"]["code"], "VALIDATION_ERROR");
        assert!(json_body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Price cannot be negative"));

        // Guard and CurrentUser both ran, but the subject was resolved once
        assert_eq!(app.store.lookup_count(), 1);
    }
}
