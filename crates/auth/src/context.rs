//! Per-request authentication state
//!
//! The resolved outcome of one request's authentication attempt, memoized
//! in the request's `http::Extensions`. Absence means unresolved; an
//! inserted value is terminal for the request and dies with it. Backend
//! faults are deliberately not representable here, so they can never be
//! memoized.

use crate::error::AuthError;
use crate::types::Subject;

/// Terminal authentication failure for one request
#[derive(Debug, Clone)]
pub enum AuthFailure {
    /// Token missing, malformed, tampered, or expired
    TokenInvalid { reason: String },
    /// Token verified but its subject no longer exists
    SubjectNotFound { reason: String },
}

impl From<AuthFailure> for AuthError {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::TokenInvalid { reason } => AuthError::TokenInvalid { reason },
            AuthFailure::SubjectNotFound { reason } => AuthError::SubjectNotFound { reason },
        }
    }
}

/// Memoized resolution outcome, stored in request extensions
#[derive(Debug, Clone)]
pub(crate) struct ResolvedAuth(pub Result<Subject, AuthFailure>);
