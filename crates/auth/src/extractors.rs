//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthGate: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::error::AuthError;
use crate::gate::AuthGate;
use crate::types::Subject;

/// Resolved subject extractor (401 surface).
///
/// Rejection renders the detailed 401 body with the failure reason and
/// hint. Use on handlers that act as the authenticated user.
#[derive(Debug)]
pub struct CurrentUser(pub Subject);

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let gate = AuthGate::from_ref(state);
        let subject = gate.current_user(parts).await?;
        Ok(CurrentUser(subject))
    }
}

/// Login guard extractor (403 surface).
///
/// Rejects with 403 and an empty body when no subject resolves. List it
/// before other extractors on gated handlers so the gate runs first; a
/// following `CurrentUser` on the same request replays the memoized
/// resolution instead of re-verifying.
#[derive(Debug)]
pub struct RequireLogin;

impl<S> FromRequestParts<S> for RequireLogin
where
    AuthGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let gate = AuthGate::from_ref(state);
        gate.require_authenticated(parts).await?;
        Ok(RequireLogin)
    }
}
