//! Postgres-backed subject store
//!
//! Wraps `PgPool` and owns the auth-specific SQL. Uses runtime
//! `sqlx::query_as` (not macros) so the crate builds without a live
//! database.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::store::{LookupError, SubjectStore};
use crate::types::Subject;

/// Subject store over the `users` table
#[derive(Clone)]
pub struct PgSubjectStore {
    pool: PgPool,
}

impl PgSubjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubjectStore for PgSubjectStore {
    async fn find_by_id(&self, id: i64) -> Result<Subject, LookupError> {
        let subject: Option<Subject> = sqlx::query_as(
            r#"
            SELECT id, email, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, subject_id = id, "Failed to load subject");
            LookupError::Backend(e.into())
        })?;

        subject.ok_or(LookupError::NotFound(id))
    }
}
