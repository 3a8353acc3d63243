//! User repository

use crate::domain::entities::User;
use sqlx::PgPool;
use storefront_common::{Error, Result};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, email, password_digest, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, email, password_digest, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Create a user. A duplicate email surfaces as `Error::Conflict`.
    pub async fn create(&self, email: &str, password_digest: &str) -> Result<User> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (email, password_digest, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, email, password_digest, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_digest)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Error::Conflict("Email has already been taken".to_string())
            }
            _ => Error::Database(e),
        })?;

        Ok(user)
    }

    /// Update email and/or password digest, leaving absent fields untouched
    pub async fn update(
        &self,
        id: i64,
        email: Option<String>,
        password_digest: Option<String>,
    ) -> Result<Option<User>> {
        let updated: Option<User> = sqlx::query_as(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                password_digest = COALESCE($3, password_digest),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, password_digest, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(password_digest)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Error::Conflict("Email has already been taken".to_string())
            }
            _ => Error::Database(e),
        })?;

        Ok(updated)
    }

    /// Delete a user, returning whether a row was removed
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
