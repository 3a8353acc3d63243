//! Request authentication gate
//!
//! Resolves the caller behind a request exactly once: extract the token,
//! decode it, look up the subject, and memoize the outcome in the
//! request's extensions so later extractors on the same request reuse it.

use std::sync::Arc;

use axum::http::request::Parts;

use crate::context::{AuthFailure, ResolvedAuth};
use crate::error::AuthError;
use crate::jwt::{bearer_token, TokenCodec};
use crate::store::{LookupError, SubjectStore};
use crate::types::Subject;

/// Authentication gate, injected into handlers via state (`FromRef`).
///
/// Cheap to clone; the subject store is shared behind an `Arc`.
#[derive(Clone)]
pub struct AuthGate {
    codec: TokenCodec,
    store: Arc<dyn SubjectStore>,
}

impl AuthGate {
    pub fn new(codec: TokenCodec, store: Arc<dyn SubjectStore>) -> Self {
        Self { codec, store }
    }

    /// The codec this gate verifies with. Login reuses it for issuance.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Resolve the subject behind this request, at most once.
    ///
    /// The first call decodes the token and looks up the subject; the
    /// outcome (success or terminal failure) is memoized in
    /// `parts.extensions` and replayed by any later call on the same
    /// request. Backend faults from the store propagate immediately and
    /// are never memoized, so they cannot masquerade as auth decisions.
    pub async fn current_user(&self, parts: &mut Parts) -> Result<Subject, AuthError> {
        if let Some(resolved) = parts.extensions.get::<ResolvedAuth>() {
            return resolved.0.clone().map_err(AuthError::from);
        }

        let token = bearer_token(&parts.headers);

        let claims = match self.codec.decode(&token) {
            Ok(claims) => claims,
            Err(e) => {
                let failure = AuthFailure::TokenInvalid {
                    reason: e.to_string(),
                };
                parts.extensions.insert(ResolvedAuth(Err(failure.clone())));
                return Err(failure.into());
            }
        };

        match self.store.find_by_id(claims.sub).await {
            Ok(subject) => {
                parts.extensions.insert(ResolvedAuth(Ok(subject.clone())));
                Ok(subject)
            }
            Err(e @ LookupError::NotFound(_)) => {
                let failure = AuthFailure::SubjectNotFound {
                    reason: e.to_string(),
                };
                parts.extensions.insert(ResolvedAuth(Err(failure.clone())));
                Err(failure.into())
            }
            Err(LookupError::Backend(e)) => Err(AuthError::Store(e)),
        }
    }

    /// Require a resolvable subject, without exposing it.
    ///
    /// Auth failures collapse to `Forbidden` (403, empty body) here; the
    /// detailed 401 surface belongs to `current_user`. Store faults still
    /// propagate unchanged.
    pub async fn require_authenticated(&self, parts: &mut Parts) -> Result<(), AuthError> {
        match self.current_user(parts).await {
            Ok(_) => Ok(()),
            Err(AuthError::Store(e)) => Err(AuthError::Store(e)),
            Err(_) => Err(AuthError::Forbidden),
        }
    }
}
