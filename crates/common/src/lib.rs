//! Shared utilities, configuration, and error handling for Storefront
//!
//! This crate provides the common foundation used by every other crate in the
//! workspace: environment-driven configuration, the application-wide error
//! type, password hashing, and reusable axum extractors.

pub mod config;
pub mod crypto;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use crypto::{hash_password, verify_password};
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
