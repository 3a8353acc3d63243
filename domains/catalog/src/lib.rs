//! Catalog domain: users, products, login

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Product, User};
// Re-export repository types
pub use repository::{CatalogRepositories, ProductRepository, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::CatalogState;
