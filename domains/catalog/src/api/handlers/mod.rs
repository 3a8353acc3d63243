//! HTTP handlers for the catalog domain

pub mod products;
pub mod sessions;
pub mod users;
