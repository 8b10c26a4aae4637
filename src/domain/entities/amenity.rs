//! Amenity entity.

use serde::Serialize;
use serde_json::{Value, json};

use super::{Entity, Metadata};
use crate::domain::validation::{self, ValidationResult};

/// A feature a place can offer, such as "Wifi" or "Fireplace".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Amenity {
    #[serde(flatten)]
    meta: Metadata,
    name: String,
}

impl Amenity {
    pub fn new(input: NewAmenity) -> ValidationResult<Self> {
        let amenity = Self {
            meta: Metadata::new(),
            name: input.name,
        };
        amenity.validate()?;
        Ok(amenity)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies a partial update. On error the amenity is left unchanged.
    pub fn apply(&mut self, patch: AmenityPatch) -> ValidationResult {
        let mut candidate = self.clone();
        if let Some(name) = patch.name {
            candidate.name = name;
        }
        candidate.validate()?;
        candidate.meta.touch();
        *self = candidate;
        Ok(())
    }

    fn validate(&self) -> ValidationResult {
        validation::not_blank("name", &self.name, "Amenity name")?;
        validation::max_chars("name", &self.name, 50, "Amenity name")
    }
}

impl Entity for Amenity {
    const KIND: &'static str = "Amenity";

    fn metadata(&self) -> &Metadata {
        &self.meta
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(json!(self.name)),
            _ => self.meta.attribute(name),
        }
    }
}

/// Input data for creating a new amenity.
#[derive(Debug, Clone)]
pub struct NewAmenity {
    pub name: String,
}

/// Partial update for an existing amenity.
#[derive(Debug, Clone, Default)]
pub struct AmenityPatch {
    pub name: Option<String>,
}
