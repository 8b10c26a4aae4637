//! Domain layer containing business entities and logic.
//!
//! Defines the entities, their invariants, and the repository interface,
//! independent of HTTP and storage concerns.
//!
//! # Architecture
//!
//! - [`entities`] - User, Place, Review, Amenity and their serialized records
//! - [`validation`] - Invariant checks and [`validation::ValidationError`]
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Entities cannot be constructed or updated into an invalid state
//! - Cross-entity rules live in [`crate::application::facade`]

pub mod entities;
pub mod repositories;
pub mod validation;
