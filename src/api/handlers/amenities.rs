//! Handlers for amenity endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::amenity::{CreateAmenityRequest, UpdateAmenityRequest};
use crate::api::dto::message::MessageResponse;
use crate::api::extract::ValidatedJson;
use crate::domain::entities::Record;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/v1/amenities`
pub async fn create_amenity_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAmenityRequest>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let amenity = state.facade.create_amenity(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(Record::Amenity(amenity))))
}

/// `GET /api/v1/amenities`
pub async fn list_amenities_handler(State(state): State<AppState>) -> Json<Vec<Record>> {
    let amenities = state.facade.get_all_amenities().await;
    Json(amenities.into_iter().map(Record::Amenity).collect())
}

/// `GET /api/v1/amenities/{id}`
pub async fn get_amenity_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Record>, AppError> {
    let amenity = state.facade.get_amenity(&id).await?;
    Ok(Json(Record::Amenity(amenity)))
}

/// `PUT /api/v1/amenities/{id}`
pub async fn update_amenity_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateAmenityRequest>,
) -> Result<Json<Record>, AppError> {
    let amenity = state.facade.update_amenity(&id, payload.into()).await?;
    Ok(Json(Record::Amenity(amenity)))
}

/// Deletes an amenity. Places that list it simply stop rendering it.
///
/// # Endpoint
///
/// `DELETE /api/v1/amenities/{id}`
pub async fn delete_amenity_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state.facade.delete_amenity(&id).await?;
    Ok(Json(deleted.into()))
}
