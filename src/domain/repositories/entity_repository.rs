//! Repository trait for identity-keyed entity storage.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::entities::Entity;
use crate::error::AppError;

/// Storage interface for one entity type.
///
/// Entities are keyed by [`Entity::id`]; no two stored entities share an id.
/// Listing and attribute lookups follow insertion order.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryRepository`] - process-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Stores a new entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if an entity with the same id is already stored.
    async fn add(&self, entity: T) -> Result<T, AppError>;

    /// Finds an entity by id.
    async fn get(&self, id: Uuid) -> Option<T>;

    /// Returns a snapshot of all entities in insertion order.
    async fn get_all(&self) -> Vec<T>;

    /// Returns the first entity whose attribute `name` equals `value`.
    async fn get_by_attribute(&self, name: &str, value: &Value) -> Option<T>;

    /// Replaces a stored entity, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entity has this id.
    async fn update(&self, entity: T) -> Result<T, AppError>;

    /// Removes an entity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entity has this id.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Number of stored entities.
    async fn count(&self) -> usize;
}
