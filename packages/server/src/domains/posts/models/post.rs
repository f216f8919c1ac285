use serde::{Deserialize, Serialize};

/// A single content item as delivered by the remote post source.
///
/// Records are decoded once and only read afterwards. `id` comes from the
/// source and is never generated locally; `author_id` is an opaque user
/// reference that is displayed but never resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", alias = "authorId")]
    pub author_id: i64,
}

impl PostRecord {
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>, author_id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }

    /// Case-insensitive substring match against title or body.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }
}
