//! Login API handler
//!
//! Verifies credentials and issues an access token through the gate's
//! codec. Unknown emails and wrong passwords produce the same response.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use storefront_common::{Error, Result, ValidatedJson};

use crate::api::middleware::CatalogState;

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub exp: DateTime<Utc>,
    pub email: String,
}

/// POST /auth/login - Verify credentials and issue a token
pub async fn login(
    State(state): State<CatalogState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = state.repos.users.find_by_email(&request.email).await?;

    let user = match user {
        Some(user) if user.authenticate(&request.password) => user,
        _ => {
            return Err(Error::Authentication(
                "Invalid email or password".to_string(),
            ))
        }
    };

    let (token, exp) = state
        .auth
        .codec()
        .issue(user.id)
        .map_err(|e| Error::Internal(format!("Failed to issue token: {}", e)))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        token,
        exp,
        email: user.email,
    }))
}
