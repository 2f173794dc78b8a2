use async_trait::async_trait;

use crate::domain::{Author, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// Listing returns entities in insertion order.
#[async_trait]
pub trait BaseRepository<T>: Send + Sync {
    /// Return every entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepoError>;

    /// Append a new entity. Fails with `Constraint` if the id is taken.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Replace an existing entity in place. Fails with `NotFound` if absent.
    async fn replace(&self, id: &str, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID, returning whether anything was removed.
    async fn delete(&self, id: &str) -> Result<bool, RepoError>;
}

/// Author repository.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author> {}

/// Post repository with lookups by owning author.
#[async_trait]
pub trait PostRepository: BaseRepository<Post> {
    async fn find_by_author_id(&self, author_id: &str) -> Result<Vec<Post>, RepoError>;

    /// Remove every post owned by the author in one pass. Returns the count removed.
    async fn delete_by_author_id(&self, author_id: &str) -> Result<usize, RepoError>;
}
