//! Route definitions for the catalog domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{products, sessions, users};
use super::middleware::CatalogState;

/// Create product routes
fn product_routes() -> Router<CatalogState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
}

/// Create user and account routes
fn user_routes() -> Router<CatalogState> {
    Router::new()
        .route("/users", post(users::signup))
        .route("/users/{id}", get(users::get_user))
        .route(
            "/account",
            get(users::get_account)
                .patch(users::update_account)
                .delete(users::delete_account),
        )
}

/// Create login routes
fn session_routes() -> Router<CatalogState> {
    Router::new().route("/auth/login", post(sessions::login))
}

/// Create all catalog domain API routes
pub fn routes() -> Router<CatalogState> {
    Router::new()
        .merge(product_routes())
        .merge(user_routes())
        .merge(session_routes())
}
