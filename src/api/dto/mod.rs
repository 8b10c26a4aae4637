//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies use Serde for deserialization and validator for the checks
//! that belong to the transport (required fields). Entity invariants are
//! enforced by the domain types after conversion.
//!
//! Update bodies reject unknown keys.

pub mod amenity;
pub mod health;
pub mod message;
pub mod place;
pub mod review;
pub mod user;
