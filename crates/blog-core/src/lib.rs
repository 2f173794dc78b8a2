//! # Blog Core
//!
//! The domain layer of the blog API.
//! Entities, repository ports and the services that enforce the
//! author/post relationship. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
pub use services::{AuthorService, PostService, WriteGate};
