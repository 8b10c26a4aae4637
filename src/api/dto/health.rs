//! DTOs for health check endpoint.

use serde::Serialize;

use crate::application::{AmenityPolicy, EntityCounts};

/// Health check response with catalog sizes.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub unresolved_amenities: String,
    pub entities: EntityCounts,
}

impl HealthResponse {
    pub fn new(entities: EntityCounts, policy: AmenityPolicy) -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            unresolved_amenities: policy.to_string(),
            entities,
        }
    }
}
