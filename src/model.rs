//! Blog entity and request payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted blog post. `id`, `created_at` and `updated_at` are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for create and update. Any `id` or timestamps in the body are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPayload {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        BlogPayload {
            title: title.into(),
            content: content.into(),
            category: category.into(),
            tags,
        }
    }
}

impl Blog {
    /// Case-insensitive substring match on title, content or category.
    /// `needle` must already be lowercase.
    pub fn matches_term(&self, needle: &str) -> bool {
        [&self.title, &self.content, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
