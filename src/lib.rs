//! # HBnB
//!
//! An in-memory property-rental catalog (users, places, reviews and
//! amenities) served over a REST API built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps a layered layout:
//!
//! - **Domain Layer** ([`domain`]) - Entities, their invariants and the repository trait
//! - **Application Layer** ([`application`]) - The facade enforcing cross-entity rules
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Entity validation on construction and on every update
//! - Places rendered with owner, amenities and reviews resolved
//! - Configurable handling of unknown amenity ids
//! - Structured logging, text or JSON
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST localhost:5000/api/v1/users \
//!   -H 'content-type: application/json' \
//!   -d '{"first_name":"Alice","last_name":"Smith","email":"alice@test.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{AmenityPolicy, HBnBFacade, PlaceInput, ReviewInput};
    pub use crate::domain::entities::{
        Amenity, Entity, NewAmenity, NewUser, Place, Record, Review, User,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
