//! Storefront application composition root
//!
//! Composes the catalog router, the authentication gate, and shared
//! infrastructure routes into a single application.

use std::sync::Arc;

use axum::{http::StatusCode, Json, Router};
use serde_json::json;
use sqlx::PgPool;
use storefront_auth::{AuthConfig, AuthGate, PgSubjectStore, TokenCodec};
use storefront_catalog::{CatalogRepositories, CatalogState};
use storefront_common::Config;

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let repos = CatalogRepositories::new(pool.clone());

    let codec = TokenCodec::new(AuthConfig {
        secret: config.token_secret.clone(),
        token_ttl_secs: config.token_ttl_secs,
    });
    let gate = AuthGate::new(codec, Arc::new(PgSubjectStore::new(pool)));

    let state = CatalogState { repos, auth: gate };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Storefront API v0.1.0" }),
        )
        .merge(storefront_catalog::routes().with_state(state))
        .fallback(not_found)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// JSON catch-all for unmatched routes
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": "Route not found",
            }
        })),
    )
}
