//! DTOs for place endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::application::PlaceInput;
use crate::domain::entities::PlacePatch;

/// Body of `POST /places`.
///
/// `owner_id` and `amenities` are raw id strings; the facade resolves them.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,

    #[validate(length(min = 1, message = "owner_id is required"))]
    pub owner_id: String,

    #[serde(default)]
    pub amenities: Vec<String>,
}

impl From<CreatePlaceRequest> for PlaceInput {
    fn from(req: CreatePlaceRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
            latitude: req.latitude,
            longitude: req.longitude,
            owner_id: req.owner_id,
            amenities: req.amenities,
        }
    }
}

/// Body of `PUT /places/{id}`. The owner and the relation lists are not
/// updatable here.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdatePlaceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<UpdatePlaceRequest> for PlacePatch {
    fn from(req: UpdatePlaceRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}
