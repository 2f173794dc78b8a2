//! In-memory repositories.

mod repository;

pub use repository::InMemoryRepository;

use async_trait::async_trait;

use blog_core::RepoError;
use blog_core::domain::{Author, Post};
use blog_core::ports::{AuthorRepository, PostRepository};

/// In-memory author repository.
pub type InMemoryAuthorRepository = InMemoryRepository<Author>;

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

impl AuthorRepository for InMemoryAuthorRepository {}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_author_id(&self, author_id: &str) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|post| post.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn delete_by_author_id(&self, author_id: &str) -> Result<usize, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|post| post.author_id != author_id);
        let removed = before - store.len();

        tracing::debug!(author_id = %author_id, removed, "Deleted posts by author");
        Ok(removed)
    }
}
