use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A blog post record as the store returns it. Created and edited
/// externally; consumed here read-only.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    /// Markdown source.
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
