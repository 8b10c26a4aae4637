//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryRepository`] - Generic process-memory store, one instance per entity type

pub mod in_memory_repository;

pub use in_memory_repository::InMemoryRepository;
