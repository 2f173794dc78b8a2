use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::RepoError;
use blog_core::domain::Entity;
use blog_core::ports::BaseRepository;

/// Generic in-memory repository over a `Vec` guarded by an async RwLock.
///
/// Entities are kept in insertion order, which is the order listings return.
pub struct InMemoryRepository<T>
where
    T: Entity,
{
    pub(crate) store: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T>
where
    T: Entity,
{
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored entities.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T> Default for InMemoryRepository<T>
where
    T: Entity,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> BaseRepository<T> for InMemoryRepository<T>
where
    T: Entity,
{
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|e| e.id() == id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|e| e.id() == entity.id()) {
            return Err(RepoError::Constraint(format!(
                "id {} already exists",
                entity.id()
            )));
        }

        tracing::debug!(id = %entity.id(), "Inserting entity");
        store.push(entity.clone());
        Ok(entity)
    }

    async fn replace(&self, id: &str, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        let slot = store
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(RepoError::NotFound)?;

        tracing::debug!(id = %id, "Replacing entity");
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: &str) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        let Some(index) = store.iter().position(|e| e.id() == id) else {
            return Ok(false);
        };

        tracing::debug!(id = %id, "Deleting entity");
        store.remove(index);
        Ok(true)
    }
}
