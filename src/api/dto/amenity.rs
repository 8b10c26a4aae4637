//! DTOs for amenity endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{AmenityPatch, NewAmenity};

/// Body of `POST /amenities`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAmenityRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

impl From<CreateAmenityRequest> for NewAmenity {
    fn from(req: CreateAmenityRequest) -> Self {
        Self { name: req.name }
    }
}

/// Body of `PUT /amenities/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateAmenityRequest {
    pub name: Option<String>,
}

impl From<UpdateAmenityRequest> for AmenityPatch {
    fn from(req: UpdateAmenityRequest) -> Self {
        Self { name: req.name }
    }
}
