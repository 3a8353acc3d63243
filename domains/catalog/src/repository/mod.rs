//! Repository implementations for the catalog domain
//!
//! Repositories use runtime `sqlx::query_as` (not the compile-time
//! macros) so the workspace builds without a live database.

pub mod products;
pub mod users;

use sqlx::PgPool;

pub use products::ProductRepository;
pub use users::UserRepository;

/// Combined repository access for the catalog domain
#[derive(Clone)]
pub struct CatalogRepositories {
    pub users: UserRepository,
    pub products: ProductRepository,
}

impl CatalogRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            products: ProductRepository::new(pool),
        }
    }
}
