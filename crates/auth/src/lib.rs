//! Token authentication for the Storefront API
//!
//! Provides the HS256 token codec, the per-request authentication gate,
//! and axum extractors that work with any state implementing
//! `FromRef<S>` for `AuthGate`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod gate;
mod jwt;
pub mod mock;
mod store;
mod types;

pub use backend::PgSubjectStore;
pub use claims::TokenClaims;
pub use config::AuthConfig;
pub use context::AuthFailure;
pub use error::AuthError;
pub use extractors::{CurrentUser, RequireLogin};
pub use gate::AuthGate;
pub use jwt::{bearer_token, DecodeError, EncodeError, TokenCodec};
pub use store::{LookupError, SubjectStore};
pub use types::Subject;
