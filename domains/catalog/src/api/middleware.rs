//! Catalog domain state and auth gate integration

use crate::repository::CatalogRepositories;
use axum::extract::FromRef;
use storefront_auth::AuthGate;

/// Application state for the catalog domain
#[derive(Clone)]
pub struct CatalogState {
    pub repos: CatalogRepositories,
    pub auth: AuthGate,
}

impl FromRef<CatalogState> for AuthGate {
    fn from_ref(state: &CatalogState) -> Self {
        state.auth.clone()
    }
}
