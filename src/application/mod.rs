//! Application layer orchestrating the catalog.
//!
//! [`facade::HBnBFacade`] owns one repository per entity type and enforces the
//! rules that span entities. HTTP handlers only ever talk to the facade.

pub mod facade;

pub use facade::{AmenityPolicy, Deleted, EntityCounts, HBnBFacade, PlaceInput, ReviewInput};
