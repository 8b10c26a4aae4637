//! Handlers for review endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::message::MessageResponse;
use crate::api::dto::review::{CreateReviewRequest, UpdateReviewRequest};
use crate::api::extract::ValidatedJson;
use crate::domain::entities::Record;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a review and attaches it to its place.
///
/// # Endpoint
///
/// `POST /api/v1/reviews`
///
/// # Errors
///
/// Returns 400 if the rating is outside 1..=5 or the text is empty.
/// Returns 404 if the user or the place does not exist.
pub async fn create_review_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let review = state.facade.create_review(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(Record::Review(review))))
}

/// `GET /api/v1/reviews`
pub async fn list_reviews_handler(State(state): State<AppState>) -> Json<Vec<Record>> {
    let reviews = state.facade.get_all_reviews().await;
    Json(reviews.into_iter().map(Record::Review).collect())
}

/// `GET /api/v1/reviews/{id}`
pub async fn get_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Record>, AppError> {
    let review = state.facade.get_review(&id).await?;
    Ok(Json(Record::Review(review)))
}

/// `PUT /api/v1/reviews/{id}`
pub async fn update_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateReviewRequest>,
) -> Result<Json<Record>, AppError> {
    let review = state.facade.update_review(&id, payload.into()).await?;
    Ok(Json(Record::Review(review)))
}

/// `DELETE /api/v1/reviews/{id}`
pub async fn delete_review_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state.facade.delete_review(&id).await?;
    Ok(Json(deleted.into()))
}
