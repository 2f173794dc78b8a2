//! Application state - shared across all handlers.

use blog_core::{AuthorService, PostService};

/// Shared application state.
///
/// Cloning is cheap: both services share the same store and write gate.
#[derive(Clone)]
pub struct AppState {
    pub authors: AuthorService,
    pub posts: PostService,
}

impl AppState {
    /// Build the application state over a fresh in-memory store.
    pub fn new() -> Self {
        let (authors, posts) = blog_infra::in_memory_services();
        tracing::info!("Application state initialized (in-memory store)");

        Self { authors, posts }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
