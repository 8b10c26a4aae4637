//! Handlers for place endpoints.
//!
//! Places are always rendered with their owner, amenities and reviews
//! resolved, see [`HBnBFacade::render_place`].
//!
//! [`HBnBFacade::render_place`]: crate::application::HBnBFacade::render_place

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::message::MessageResponse;
use crate::api::dto::place::{CreatePlaceRequest, UpdatePlaceRequest};
use crate::api::extract::ValidatedJson;
use crate::domain::entities::Record;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a place.
///
/// # Endpoint
///
/// `POST /api/v1/places`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Cabin",
///   "description": "Quiet cabin",
///   "price": 200.0,
///   "latitude": 45.0,
///   "longitude": -120.0,
///   "owner_id": "6f1c...",
///   "amenities": ["0b7e..."]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 on invalid price or coordinates, or an unresolved amenity when
/// the server runs with `UNRESOLVED_AMENITIES=reject`.
/// Returns 404 if the owner does not exist.
pub async fn create_place_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePlaceRequest>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let place = state.facade.create_place(payload.into()).await?;
    let record = state.facade.render_place(&place).await;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /api/v1/places`
pub async fn list_places_handler(State(state): State<AppState>) -> Json<Vec<Record>> {
    let places = state.facade.get_all_places().await;
    let mut records = Vec::with_capacity(places.len());
    for place in &places {
        records.push(state.facade.render_place(place).await);
    }
    Json(records)
}

/// `GET /api/v1/places/{id}`
pub async fn get_place_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Record>, AppError> {
    let place = state.facade.get_place(&id).await?;
    Ok(Json(state.facade.render_place(&place).await))
}

/// `PUT /api/v1/places/{id}`
pub async fn update_place_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdatePlaceRequest>,
) -> Result<Json<Record>, AppError> {
    let place = state.facade.update_place(&id, payload.into()).await?;
    Ok(Json(state.facade.render_place(&place).await))
}

/// `DELETE /api/v1/places/{id}`
pub async fn delete_place_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state.facade.delete_place(&id).await?;
    Ok(Json(deleted.into()))
}

/// Attaches an amenity to a place. Repeating the call is a no-op.
///
/// # Endpoint
///
/// `POST /api/v1/places/{id}/amenities/{amenity_id}`
pub async fn add_place_amenity_handler(
    Path((id, amenity_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<Record>, AppError> {
    let place = state.facade.add_amenity_to_place(&id, &amenity_id).await?;
    Ok(Json(state.facade.render_place(&place).await))
}

/// `GET /api/v1/places/{id}/reviews`
pub async fn list_place_reviews_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, AppError> {
    let reviews = state.facade.get_reviews_by_place(&id).await?;
    Ok(Json(reviews.into_iter().map(Record::Review).collect()))
}
