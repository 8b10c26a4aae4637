//! Repository trait definitions for the domain layer.
//!
//! A single generic [`Repository`] trait covers all four entity types; the
//! facade holds one instance per type.
//!
//! # Architecture
//!
//! - The trait defines the storage contract
//! - The implementation lives in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod entity_repository;

pub use entity_repository::Repository;

#[cfg(test)]
pub use entity_repository::MockRepository;
