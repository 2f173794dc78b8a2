//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads a field the way a truthiness check would: strings pass through,
/// other truthy scalars and containers become their JSON text, and falsy
/// values (`null`, `false`, `0`) count as absent.
fn truthy_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(other) => Some(other.to_string()),
    })
}

/// Body of `POST /api/authors` and `PUT /api/authors/:id`.
///
/// Fields are optional on the wire so that a missing field surfaces as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorRequest {
    #[serde(default, deserialize_with = "truthy_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "truthy_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "truthy_string")]
    pub bio: Option<String>,
}

/// Body of `POST /api/posts` and `PUT /api/posts/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[serde(default, deserialize_with = "truthy_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "truthy_string")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "truthy_string")]
    pub author_id: Option<String>,
}

/// Response of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub authors: String,
    pub posts: String,
}

impl Default for IndexResponse {
    fn default() -> Self {
        Self {
            message: "Blog API is running".to_string(),
            endpoints: Endpoints {
                authors: "/api/authors".to_string(),
                posts: "/api/posts".to_string(),
            },
        }
    }
}
