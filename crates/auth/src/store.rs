//! Subject lookup seam
//!
//! The gate resolves token subjects through this trait so tests can run
//! against an in-memory store and the app against Postgres.

use async_trait::async_trait;

use crate::types::Subject;

/// Why a subject lookup failed.
///
/// `NotFound` is a terminal auth outcome (the token was valid but the
/// subject is gone); `Backend` is an infrastructure fault and propagates
/// without being treated as an auth decision.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("couldn't find subject with id={0}")]
    NotFound(i64),
    #[error("subject lookup failed: {0}")]
    Backend(anyhow::Error),
}

/// Resolves token subjects to stored identities
#[async_trait]
pub trait SubjectStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Subject, LookupError>;
}
