use serde::{Deserialize, Serialize};

use super::{generate_id, present};

/// Author entity - the writer of blog posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: String,
}

/// Author fields as submitted by a client. Every field may be absent.
#[derive(Debug, Clone, Default)]
pub struct AuthorInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

impl AuthorInput {
    /// Name and email, if both are present and non-empty.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        Some((present(&self.name)?, present(&self.email)?))
    }
}

impl Author {
    /// Create a new author with a generated id. A missing bio becomes empty.
    pub fn new(name: String, email: String, bio: Option<String>) -> Self {
        Self {
            id: generate_id(),
            name,
            email,
            bio: bio.unwrap_or_default(),
        }
    }

    /// Replace name and email; the bio is only overwritten by a non-empty value.
    pub fn apply(&mut self, name: String, email: String, bio: Option<String>) {
        self.name = name;
        self.email = email;
        if let Some(bio) = bio.filter(|b| !b.is_empty()) {
            self.bio = bio;
        }
    }
}
