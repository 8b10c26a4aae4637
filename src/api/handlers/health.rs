//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service status with the number of stored entities.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "unresolved_amenities": "skip",
///   "entities": { "users": 2, "places": 1, "reviews": 0, "amenities": 3 }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let counts = state.facade.counts().await;
    Json(HealthResponse::new(counts, state.facade.amenity_policy()))
}
