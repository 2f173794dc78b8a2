//! Application services - validation and orchestration over the repository ports.

mod author;
mod post;

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

pub use author::AuthorService;
pub use post::PostService;

/// Serializes every mutating operation across both collections.
///
/// Held for the whole validate-then-mutate sequence, so an author-existence
/// check and the insert that depends on it cannot interleave with a cascade.
#[derive(Clone, Default)]
pub struct WriteGate(Arc<Mutex<()>>);

impl WriteGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.0.lock().await
    }
}
