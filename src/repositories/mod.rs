// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic (entities validate themselves on rebuild)
// - Whole-catalog load and save only

pub mod catalog_repository;
pub mod records;

pub use catalog_repository::{CatalogData, CatalogRepository, JsonCatalogRepository};

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
