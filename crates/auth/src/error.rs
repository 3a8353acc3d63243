//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
///
/// The two 401 variants carry the underlying reason so it can surface in
/// the response body alongside the fixed hint. `Forbidden` renders with
/// an empty body; that asymmetry with the 401s is part of the observable
/// contract.
#[derive(Debug)]
pub enum AuthError {
    /// Token missing, malformed, tampered, or expired (401)
    TokenInvalid { reason: String },
    /// Token verified but its subject no longer exists (401)
    SubjectNotFound { reason: String },
    /// Gated action reached without a resolvable subject (403, empty body)
    Forbidden,
    /// Subject lookup hit an infrastructure fault (500)
    Store(anyhow::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::TokenInvalid { reason } => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "errors": reason,
                    "msg": "Token Error: Check token",
                })),
            )
                .into_response(),
            AuthError::SubjectNotFound { reason } => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "errors": reason,
                    "msg": "record not found",
                })),
            )
                .into_response(),
            AuthError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            AuthError::Store(e) => {
                tracing::error!(error = %e, "Subject lookup failed during authentication");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": {
                            "code": "AUTH_ERROR",
                            "message": "Authentication failed",
                        }
                    })),
                )
                    .into_response()
            }
        }
    }
}
