//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! The only backend is a process-local in-memory store; nothing survives a restart.

pub mod memory;

pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository, InMemoryRepository};

use std::sync::Arc;

use blog_core::{AuthorService, PostService, WriteGate};

/// Build both services over a fresh, empty in-memory store.
pub fn in_memory_services() -> (AuthorService, PostService) {
    let authors = Arc::new(InMemoryAuthorRepository::new());
    let posts = Arc::new(InMemoryPostRepository::new());
    let gate = WriteGate::new();

    (
        AuthorService::new(authors.clone(), posts.clone(), gate.clone()),
        PostService::new(authors, posts, gate),
    )
}
