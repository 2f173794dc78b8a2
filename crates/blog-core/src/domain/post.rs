use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::{generate_id, present};

/// Post entity - a blog article owned by exactly one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    #[serde(with = "millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "millis")]
    pub updated_at: DateTime<Utc>,
}

/// RFC 3339 timestamps with exactly three fractional digits, e.g.
/// `2024-01-01T00:00:00.123Z`.
mod millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// Current time truncated to the precision timestamps are serialized with.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Post fields as submitted by a client. Every field may be absent.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<String>,
}

impl PostInput {
    /// Title, content and author id, if all three are present and non-empty.
    pub fn required_fields(&self) -> Option<(&str, &str, &str)> {
        Some((
            present(&self.title)?,
            present(&self.content)?,
            present(&self.author_id)?,
        ))
    }
}

impl Post {
    /// Create a new post. Both timestamps are set to now.
    pub fn new(title: String, content: String, author_id: String) -> Self {
        let now = now();
        Self {
            id: generate_id(),
            title,
            content,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields and refresh `updated_at`.
    pub fn apply(&mut self, title: String, content: String, author_id: String) {
        self.title = title;
        self.content = content;
        self.author_id = author_id;
        self.touch();
    }

    /// Advance `updated_at`, strictly past its previous value even if the
    /// clock has not moved by a full millisecond.
    pub fn touch(&mut self) {
        let now = now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::milliseconds(1)
        };
    }
}
