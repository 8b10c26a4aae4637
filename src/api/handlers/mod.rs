//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one entity collection. Handlers extract
//! the request, call the facade and wrap the result in a [`Record`].
//!
//! [`Record`]: crate::domain::entities::Record

pub mod amenities;
pub mod health;
pub mod places;
pub mod reviews;
pub mod users;

pub use amenities::{
    create_amenity_handler, delete_amenity_handler, get_amenity_handler, list_amenities_handler,
    update_amenity_handler,
};
pub use health::health_handler;
pub use places::{
    add_place_amenity_handler, create_place_handler, delete_place_handler, get_place_handler,
    list_place_reviews_handler, list_places_handler, update_place_handler,
};
pub use reviews::{
    create_review_handler, delete_review_handler, get_review_handler, list_reviews_handler,
    update_review_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
