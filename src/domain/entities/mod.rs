//! Core domain entities representing the catalog data model.
//!
//! # Entity Types
//!
//! - [`User`] - A registered user, possibly owning places
//! - [`Place`] - A rentable property owned by a user
//! - [`Review`] - A rating left by a user on a place
//! - [`Amenity`] - A feature a place can offer
//!
//! # Design Pattern
//!
//! Every entity validates itself in its constructor and in `apply`, so a stored
//! value always satisfies its invariants. Creation input uses `New*` structs and
//! partial updates use `*Patch` structs with only the updatable fields.
//!
//! Serialization goes through [`Record`], a tagged enum whose `__class__`
//! field names the entity type.

pub mod amenity;
pub mod place;
pub mod review;
pub mod user;

pub use amenity::{Amenity, AmenityPatch, NewAmenity};
pub use place::{NewPlace, Place, PlacePatch, PlaceRecord};
pub use review::{NewReview, Review, ReviewPatch};
pub use user::{NewUser, User, UserPatch};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

/// Identity and timestamps shared by every entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Metadata {
    /// Assigns a fresh id with both timestamps set to now.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(json!(self.id)),
            "created_at" => Some(json!(self.created_at)),
            "updated_at" => Some(json!(self.updated_at)),
            _ => None,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Common contract for everything stored in a repository.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Type name used in messages and as the record discriminator.
    const KIND: &'static str;

    fn metadata(&self) -> &Metadata;

    /// Returns the named attribute as JSON, or `None` for unknown names.
    fn attribute(&self, name: &str) -> Option<Value>;

    fn id(&self) -> Uuid {
        self.metadata().id
    }
}

/// Serialized representation of an entity.
///
/// Places carry their owner, amenities and reviews resolved to nested records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub enum Record {
    User(User),
    Place(PlaceRecord),
    Review(Review),
    Amenity(Amenity),
}

impl Record {
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
