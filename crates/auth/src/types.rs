//! Auth read-model types
//!
//! Lightweight view of the same DB row owned by the catalog domain.
//! Carries only the fields the authentication gate needs.

use chrono::{DateTime, Utc};

/// Lightweight identity for authenticated subjects.
///
/// Handlers needing full `User` data should load from their domain's
/// repository; the gate only proves the subject exists.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Subject {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
