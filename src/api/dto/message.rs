//! Confirmation body for deletions.

use serde::Serialize;

use crate::application::Deleted;

/// `{"message": "..."}` response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Deleted> for MessageResponse {
    fn from(deleted: Deleted) -> Self {
        Self {
            message: deleted.message(),
        }
    }
}
