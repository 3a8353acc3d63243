//! Domain entities for the Storefront catalog
//!
//! Entities map directly to their database rows. Neither entity derives
//! `Serialize`: API responses go through the handler DTOs, which is what
//! keeps `password_digest` out of every response by construction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use storefront_common::{verify_password, Error, Result};

/// User entity
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Verify a candidate password against the stored digest
    pub fn authenticate(&self, password: &str) -> bool {
        verify_password(password, &self.password_digest)
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: Decimal,
    pub published: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Validate the price invariant shared by create and update
    pub fn validate_price(price: &Decimal) -> Result<()> {
        if price.is_sign_negative() {
            return Err(Error::Validation("Price cannot be negative".to_string()));
        }
        Ok(())
    }
}
