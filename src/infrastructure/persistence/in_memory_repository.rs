//! In-memory implementation of the entity repository.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Entity;
use crate::domain::repositories::Repository;
use crate::error::AppError;

/// Process-memory repository for one entity type.
///
/// The map and the insertion order sit behind a single `RwLock`, so each
/// operation sees a consistent snapshot. State is lost when the process exits.
pub struct InMemoryRepository<T> {
    store: RwLock<Store<T>>,
}

struct Store<T> {
    order: Vec<Uuid>,
    items: HashMap<Uuid, T>,
}

impl<T> Store<T> {
    fn ordered(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }
}

impl<T> InMemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                order: Vec::new(),
                items: HashMap::new(),
            }),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn add(&self, entity: T) -> Result<T, AppError> {
        let mut store = self.store.write().await;
        let id = entity.id();
        if store.items.contains_key(&id) {
            return Err(AppError::conflict(
                format!("{} already exists", T::KIND),
                json!({ "id": id }),
            ));
        }
        store.order.push(id);
        store.items.insert(id, entity.clone());
        Ok(entity)
    }

    async fn get(&self, id: Uuid) -> Option<T> {
        self.store.read().await.items.get(&id).cloned()
    }

    async fn get_all(&self) -> Vec<T> {
        self.store.read().await.ordered().cloned().collect()
    }

    async fn get_by_attribute(&self, name: &str, value: &Value) -> Option<T> {
        let store = self.store.read().await;
        store
            .ordered()
            .find(|entity| entity.attribute(name).as_ref() == Some(value))
            .cloned()
    }

    async fn update(&self, entity: T) -> Result<T, AppError> {
        let mut store = self.store.write().await;
        let id = entity.id();
        match store.items.get_mut(&id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(AppError::not_found(
                format!("{} not found", T::KIND),
                json!({ "id": id }),
            )),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        if store.items.remove(&id).is_none() {
            return Err(AppError::not_found(
                format!("{} not found", T::KIND),
                json!({ "id": id }),
            ));
        }
        store.order.retain(|stored| *stored != id);
        Ok(())
    }

    async fn count(&self) -> usize {
        self.store.read().await.items.len()
    }
}
