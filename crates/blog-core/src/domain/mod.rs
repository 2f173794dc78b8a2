//! Domain entities - the core business objects.

mod author;
mod post;

pub use author::{Author, AuthorInput};
pub use post::{Post, PostInput};

/// Anything stored in a repository keyed by a string id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

impl Entity for Author {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Post {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Generate a fresh entity id.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Returns the value if it was supplied and is non-empty.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
