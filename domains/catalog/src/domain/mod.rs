//! Catalog domain layer: entities and domain rules

pub mod entities;
