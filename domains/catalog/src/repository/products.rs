//! Product repository

use crate::domain::entities::Product;
use rust_decimal::Decimal;
use sqlx::PgPool;
use storefront_common::Result;

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List products in insertion order
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>> {
        let products: Vec<Product> = sqlx::query_as(
            r#"
            SELECT id, title, price, published, user_id, created_at, updated_at
            FROM products
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Get product by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>> {
        let product: Option<Product> = sqlx::query_as(
            r#"
            SELECT id, title, price, published, user_id, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Create a product owned by `user_id`
    pub async fn create(
        &self,
        user_id: i64,
        title: &str,
        price: Decimal,
        published: bool,
    ) -> Result<Product> {
        let product: Product = sqlx::query_as(
            r#"
            INSERT INTO products (title, price, published, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, title, price, published, user_id, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(price)
        .bind(published)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Update a product, leaving absent fields untouched
    pub async fn update(
        &self,
        id: i64,
        title: Option<String>,
        price: Option<Decimal>,
        published: Option<bool>,
    ) -> Result<Option<Product>> {
        let updated: Option<Product> = sqlx::query_as(
            r#"
            UPDATE products SET
                title = COALESCE($2, title),
                price = COALESCE($3, price),
                published = COALESCE($4, published),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, price, published, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(price)
        .bind(published)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a product, returning whether a row was removed
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
