//! API route configuration.

use crate::api::handlers::{
    add_place_amenity_handler, create_amenity_handler, create_place_handler,
    create_review_handler, create_user_handler, delete_amenity_handler, delete_place_handler,
    delete_review_handler, delete_user_handler, get_amenity_handler, get_place_handler,
    get_review_handler, get_user_handler, list_amenities_handler, list_place_reviews_handler,
    list_places_handler, list_reviews_handler, list_users_handler, update_amenity_handler,
    update_place_handler, update_review_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Catalog routes, mounted under `/api/v1` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `GET|POST          /users`
/// - `GET|PUT|DELETE    /users/{id}`
/// - `GET|POST          /places`
/// - `GET|PUT|DELETE    /places/{id}`
/// - `POST              /places/{id}/amenities/{amenity_id}` - Attach an amenity
/// - `GET               /places/{id}/reviews`                - Reviews of a place
/// - `GET|POST          /reviews`
/// - `GET|PUT|DELETE    /reviews/{id}`
/// - `GET|POST          /amenities`
/// - `GET|PUT|DELETE    /amenities/{id}`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/places",
            get(list_places_handler).post(create_place_handler),
        )
        .route(
            "/places/{id}",
            get(get_place_handler)
                .put(update_place_handler)
                .delete(delete_place_handler),
        )
        .route(
            "/places/{id}/amenities/{amenity_id}",
            post(add_place_amenity_handler),
        )
        .route("/places/{id}/reviews", get(list_place_reviews_handler))
        .route(
            "/reviews",
            get(list_reviews_handler).post(create_review_handler),
        )
        .route(
            "/reviews/{id}",
            get(get_review_handler)
                .put(update_review_handler)
                .delete(delete_review_handler),
        )
        .route(
            "/amenities",
            get(list_amenities_handler).post(create_amenity_handler),
        )
        .route(
            "/amenities/{id}",
            get(get_amenity_handler)
                .put(update_amenity_handler)
                .delete(delete_amenity_handler),
        )
}
