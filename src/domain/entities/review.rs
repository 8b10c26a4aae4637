//! Review entity.

use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use super::{Entity, Metadata};
use crate::domain::validation::{self, ValidationResult};

/// A rating from 1 to 5 with a non-empty text, left by a user on a place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    #[serde(flatten)]
    meta: Metadata,
    text: String,
    rating: u8,
    user_id: Uuid,
    place_id: Uuid,
}

impl Review {
    pub fn new(input: NewReview) -> ValidationResult<Self> {
        let rating = validation::rating(input.rating)?;
        let review = Self {
            meta: Metadata::new(),
            text: input.text,
            rating,
            user_id: input.user_id,
            place_id: input.place_id,
        };
        review.validate()?;
        Ok(review)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn place_id(&self) -> Uuid {
        self.place_id
    }

    /// Applies a partial update. On error the review is left unchanged.
    pub fn apply(&mut self, patch: ReviewPatch) -> ValidationResult {
        let mut candidate = self.clone();
        if let Some(text) = patch.text {
            candidate.text = text;
        }
        if let Some(rating) = patch.rating {
            candidate.rating = validation::rating(rating)?;
        }
        candidate.validate()?;
        candidate.meta.touch();
        *self = candidate;
        Ok(())
    }

    fn validate(&self) -> ValidationResult {
        validation::not_blank("text", &self.text, "Review text")
    }
}

impl Entity for Review {
    const KIND: &'static str = "Review";

    fn metadata(&self) -> &Metadata {
        &self.meta
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "text" => Some(json!(self.text)),
            "rating" => Some(json!(self.rating)),
            "user_id" => Some(json!(self.user_id)),
            "place_id" => Some(json!(self.place_id)),
            _ => self.meta.attribute(name),
        }
    }
}

/// Input data for creating a new review.
///
/// `rating` is kept wide so out-of-range values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub text: String,
    pub rating: i64,
    pub user_id: Uuid,
    pub place_id: Uuid,
}

/// Partial update for an existing review.
#[derive(Debug, Clone, Default)]
pub struct ReviewPatch {
    pub text: Option<String>,
    pub rating: Option<i64>,
}
