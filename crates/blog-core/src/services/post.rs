use std::sync::Arc;

use crate::domain::{Post, PostInput};
use crate::error::DomainError;
use crate::ports::{AuthorRepository, PostRepository};

use super::WriteGate;

const REQUIRED_FIELDS: &str = "Title, content, and authorId are required";

/// Post CRUD. Every write checks that the referenced author exists.
#[derive(Clone)]
pub struct PostService {
    authors: Arc<dyn AuthorRepository>,
    posts: Arc<dyn PostRepository>,
    gate: WriteGate,
}

impl PostService {
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

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    pub async fn create_post(&self, input: PostInput) -> Result<Post, DomainError> {
        let (title, content, author_id) = Self::validate(&input)?;

        let _guard = self.gate.acquire().await;
        self.ensure_author_exists(author_id).await?;

        let post = Post::new(title.to_string(), content.to_string(), author_id.to_string());
        Ok(self.posts.insert(post).await?)
    }

    pub async fn update_post(&self, id: &str, input: PostInput) -> Result<Post, DomainError> {
        let _guard = self.gate.acquire().await;

        let mut post = self.get_post(id).await?;
        let (title, content, author_id) = Self::validate(&input)?;
        self.ensure_author_exists(author_id).await?;

        post.apply(title.to_string(), content.to_string(), author_id.to_string());
        let id = post.id.clone();
        Ok(self.posts.replace(&id, post).await?)
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), DomainError> {
        let _guard = self.gate.acquire().await;

        if !self.posts.delete(id).await? {
            return Err(DomainError::post_not_found(id));
        }
        Ok(())
    }

    fn validate(input: &PostInput) -> Result<(&str, &str, &str), DomainError> {
        input
            .required_fields()
            .ok_or_else(|| DomainError::Validation(REQUIRED_FIELDS.to_string()))
    }

    /// A dangling author reference is a validation failure, not a 404.
    async fn ensure_author_exists(&self, author_id: &str) -> Result<(), DomainError> {
        match self.authors.find_by_id(author_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::Validation("Author not found".to_string())),
        }
    }
}
