//! Product management API handlers
//!
//! Listing and fetching products is public; creating, updating, and
//! deleting require a logged-in caller. Gated handlers list the
//! `RequireLogin` guard first so the authentication gate runs before
//! anything else; a following `CurrentUser` replays the memoized
//! resolution instead of verifying again.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use storefront_auth::{CurrentUser, RequireLogin};
use storefront_common::{Error, Pagination, Result, ValidatedJson};

use crate::api::middleware::CatalogState;
use crate::domain::entities::Product;

/// Request for creating a product
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(custom(function = "validate_price", message = "Price cannot be negative"))]
    pub price: Decimal,

    #[serde(default)]
    pub published: bool,
}

/// Request for updating a product
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_price", message = "Price cannot be negative"))]
    pub price: Option<Decimal>,

    pub published: Option<bool>,
}

/// Custom validation function for the price invariant
fn validate_price(price: &Decimal) -> std::result::Result<(), validator::ValidationError> {
    Product::validate_price(price)
        .map_err(|_| validator::ValidationError::new("negative_price"))
}

/// Product response for API operations
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub title: String,
    pub price: Decimal,
    pub published: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            published: product.published,
            user_id: product.user_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// GET /products - List products (public)
pub async fn list_products(
    State(state): State<CatalogState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<ProductResponse>>> {
    let products = state
        .repos
        .products
        .list(pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// GET /products/{id} - Fetch one product (public)
pub async fn get_product(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>> {
    let product = state
        .repos
        .products
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Couldn't find Product with id={}", id)))?;

    Ok(Json(product.into()))
}

/// POST /products - Create a product owned by the caller
pub async fn create_product(
    _gate: RequireLogin,
    CurrentUser(subject): CurrentUser,
    State(state): State<CatalogState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let product = state
        .repos
        .products
        .create(subject.id, &request.title, request.price, request.published)
        .await?;

    tracing::info!(product_id = product.id, user_id = subject.id, "Product created");

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PATCH /products/{id} - Update a product
pub async fn update_product(
    _gate: RequireLogin,
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<ProductResponse>> {
    let product = state
        .repos
        .products
        .update(id, request.title, request.price, request.published)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Couldn't find Product with id={}", id)))?;

    Ok(Json(product.into()))
}

/// DELETE /products/{id} - Delete a product
pub async fn delete_product(
    _gate: RequireLogin,
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let deleted = state.repos.products.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound(format!(
            "Couldn't find Product with id={}",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
