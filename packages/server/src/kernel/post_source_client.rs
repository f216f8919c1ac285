//! HTTP client for the remote post collection.
//!
//! The source is a plain JSON endpoint returning an array of post objects
//! (`id`, `title`, `body`, `userId`). Anything else is a decode error.

use async_trait::async_trait;

use super::error::{PostSourceError, Result};
use super::traits::BasePostSource;
use crate::domains::posts::models::PostRecord;

/// Default collection endpoint (JSONPlaceholder demo API).
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Longest slice of an error body kept in `PostSourceError::Status`.
const MAX_ERROR_BODY: usize = 512;

#[derive(Clone)]
pub struct HttpPostSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPostSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl BasePostSource for HttpPostSource {
    fn cache_key(&self) -> &str {
        &self.url
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRecord>> {
        tracing::debug!(url = %self.url, "Fetching posts from remote source");

        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let mut body = resp.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| body.is_char_boundary(i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(PostSourceError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        // Decode from bytes so a bad payload surfaces as `Decode`, not `Network`.
        let bytes = resp.bytes().await?;
        let posts: Vec<PostRecord> = serde_json::from_slice(&bytes)?;
        tracing::debug!(count = posts.len(), "Decoded posts");

        Ok(posts)
    }
}
