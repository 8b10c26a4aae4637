//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::message::MessageResponse;
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest};
use crate::api::extract::ValidatedJson;
use crate::domain::entities::Record;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user.
///
/// # Endpoint
///
/// `POST /api/v1/users`
///
/// # Errors
///
/// Returns 400 if a field is missing, the email is malformed or already
/// registered, or a name exceeds 50 characters.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let user = state.facade.create_user(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(Record::User(user))))
}

/// `GET /api/v1/users`
pub async fn list_users_handler(State(state): State<AppState>) -> Json<Vec<Record>> {
    let users = state.facade.get_all_users().await;
    Json(users.into_iter().map(Record::User).collect())
}

/// `GET /api/v1/users/{id}`
pub async fn get_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Record>, AppError> {
    let user = state.facade.get_user(&id).await?;
    Ok(Json(Record::User(user)))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PUT /api/v1/users/{id}`
///
/// # Errors
///
/// Returns 400 on unknown keys, invalid values or an email taken by another user.
/// Returns 404 if the user does not exist.
pub async fn update_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<Record>, AppError> {
    let user = state.facade.update_user(&id, payload.into()).await?;
    Ok(Json(Record::User(user)))
}

/// Deletes a user. Places and reviews referencing the user are kept.
///
/// # Endpoint
///
/// `DELETE /api/v1/users/{id}`
pub async fn delete_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state.facade.delete_user(&id).await?;
    Ok(Json(deleted.into()))
}
