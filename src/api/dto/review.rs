//! DTOs for review endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::application::ReviewInput;
use crate::domain::entities::ReviewPatch;

/// Body of `POST /reviews`. The text may also be sent as `comment`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[serde(alias = "comment")]
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,

    pub rating: i64,

    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "place_id is required"))]
    pub place_id: String,
}

impl From<CreateReviewRequest> for ReviewInput {
    fn from(req: CreateReviewRequest) -> Self {
        Self {
            text: req.text,
            rating: req.rating,
            user_id: req.user_id,
            place_id: req.place_id,
        }
    }
}

/// Body of `PUT /reviews/{id}`. Author and place are fixed at creation.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateReviewRequest {
    #[serde(alias = "comment")]
    pub text: Option<String>,
    pub rating: Option<i64>,
}

impl From<UpdateReviewRequest> for ReviewPatch {
    fn from(req: UpdateReviewRequest) -> Self {
        Self {
            text: req.text,
            rating: req.rating,
        }
    }
}
