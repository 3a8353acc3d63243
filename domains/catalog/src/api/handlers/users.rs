//! User and account API handlers
//!
//! Signup and user lookup are public. The `/account` routes operate on
//! the authenticated caller through `CurrentUser`, whose rejection is
//! the detailed 401 surface.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use storefront_auth::{CurrentUser, Subject};
use storefront_common::{hash_password, Error, Result, ValidatedJson};

use crate::api::middleware::CatalogState;
use crate::domain::entities::User;

/// Request for creating an account
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 72))]
    pub password: String,
}

/// Request for updating the authenticated user's account
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 72))]
    pub password: Option<String>,
}

/// Response for user operations. Deliberately has no digest field.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<Subject> for UserResponse {
    fn from(subject: Subject) -> Self {
        Self {
            id: subject.id,
            email: subject.email,
            created_at: subject.created_at,
            updated_at: subject.updated_at,
        }
    }
}

/// POST /users - Create an account (public)
pub async fn signup(
    State(state): State<CatalogState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let digest = hash_password(&request.password);
    let user = state.repos.users.create(&request.email, &digest).await?;

    tracing::info!(user_id = user.id, "User signed up");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users/{id} - Fetch one user (public)
pub async fn get_user(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>> {
    let user = state
        .repos
        .users
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Couldn't find User with id={}", id)))?;

    Ok(Json(user.into()))
}

/// GET /account - Get the authenticated user's profile
pub async fn get_account(CurrentUser(subject): CurrentUser) -> Result<Json<UserResponse>> {
    // The gate already proved the subject exists; its fields are the profile
    Ok(Json(subject.into()))
}

/// PATCH /account - Update the authenticated user's account
pub async fn update_account(
    CurrentUser(subject): CurrentUser,
    State(state): State<CatalogState>,
    ValidatedJson(request): ValidatedJson<UpdateAccountRequest>,
) -> Result<Json<UserResponse>> {
    let digest = request.password.as_deref().map(hash_password);

    let updated = state
        .repos
        .users
        .update(subject.id, request.email, digest)
        .await?
        .ok_or_else(|| Error::NotFound("Couldn't find User".to_string()))?;

    Ok(Json(updated.into()))
}

/// DELETE /account - Delete the authenticated user's account
pub async fn delete_account(
    CurrentUser(subject): CurrentUser,
    State(state): State<CatalogState>,
) -> Result<StatusCode> {
    let deleted = state.repos.users.delete(subject.id).await?;
    if !deleted {
        return Err(Error::NotFound("Couldn't find User".to_string()));
    }

    tracing::info!(user_id = subject.id, "Account deleted");

    Ok(StatusCode::NO_CONTENT)
}
