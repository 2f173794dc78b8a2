use std::sync::Arc;

use crate::domain::{Author, AuthorInput, Post};
use crate::error::DomainError;
use crate::ports::{AuthorRepository, PostRepository};

use super::WriteGate;

const REQUIRED_FIELDS: &str = "Name and email are required";

/// Author CRUD, including the cascade to dependent posts.
#[derive(Clone)]
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
    posts: Arc<dyn PostRepository>,
    gate: WriteGate,
}

impl AuthorService {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        posts: Arc<dyn PostRepository>,
        gate: WriteGate,
    ) -> Self {
        Self {
            authors,
            posts,
            gate,
        }
    }

    pub async fn list_authors(&self) -> Result<Vec<Author>, DomainError> {
        Ok(self.authors.find_all().await?)
    }

    pub async fn get_author(&self, id: &str) -> Result<Author, DomainError> {
        self.authors
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::author_not_found(id))
    }

    pub async fn create_author(&self, input: AuthorInput) -> Result<Author, DomainError> {
        let (name, email) = input
            .required_fields()
            .ok_or_else(|| DomainError::Validation(REQUIRED_FIELDS.to_string()))?;
        let author = Author::new(name.to_string(), email.to_string(), input.bio.clone());

        let _guard = self.gate.acquire().await;
        Ok(self.authors.insert(author).await?)
    }

    pub async fn update_author(&self, id: &str, input: AuthorInput) -> Result<Author, DomainError> {
        let _guard = self.gate.acquire().await;

        let mut author = self.get_author(id).await?;
        let (name, email) = input
            .required_fields()
            .ok_or_else(|| DomainError::Validation(REQUIRED_FIELDS.to_string()))?;
        author.apply(name.to_string(), email.to_string(), input.bio.clone());

        let id = author.id.clone();
        Ok(self.authors.replace(&id, author).await?)
    }

    /// Delete the author and every post referencing it.
    ///
    /// Returns the number of posts removed by the cascade.
    pub async fn delete_author(&self, id: &str) -> Result<usize, DomainError> {
        let _guard = self.gate.acquire().await;

        if !self.authors.delete(id).await? {
            return Err(DomainError::author_not_found(id));
        }
        Ok(self.posts.delete_by_author_id(id).await?)
    }

    /// The author lookup and the post filter run under the gate, so a
    /// concurrent cascade cannot land between them.
    pub async fn list_posts_by_author(&self, id: &str) -> Result<Vec<Post>, DomainError> {
        let _guard = self.gate.acquire().await;

        let author = self.get_author(id).await?;
        Ok(self.posts.find_by_author_id(&author.id).await?)
    }
}
