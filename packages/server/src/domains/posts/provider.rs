//! Fail-soft post acquisition.

use std::sync::Arc;

use super::models::PostRecord;
use crate::kernel::{BasePostSource, PostCache, ServerDeps};

/// Acquires a bounded post collection from the remote source.
///
/// Failures never reach the caller: they are logged and the result is an
/// empty collection. A single attempt is made per uncached call.
#[derive(Clone)]
pub struct PostProvider {
    source: Arc<dyn BasePostSource>,
    cache: Option<Arc<PostCache>>,
}

impl PostProvider {
    pub fn new(source: Arc<dyn BasePostSource>) -> Self {
        Self {
            source,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<PostCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn from_deps(deps: &ServerDeps) -> Self {
        Self {
            source: deps.post_source.clone(),
            cache: deps.post_cache.clone(),
        }
    }

    /// First `limit` posts in source order, or none if the source failed.
    pub async fn fetch_posts(&self, limit: usize) -> Vec<PostRecord> {
        let key = self.source.cache_key();

        if let Some(cache) = &self.cache {
            if let Some(posts) = cache.get(key) {
                tracing::debug!(key, count = posts.len(), "Serving posts from cache");
                return truncate(&posts, limit);
            }
        }

        match self.source.fetch_posts().await {
            Ok(posts) => {
                tracing::info!(count = posts.len(), limit, "Fetched posts");
                match &self.cache {
                    Some(cache) => truncate(&cache.insert(key, posts), limit),
                    None => {
                        let mut posts = posts;
                        posts.truncate(limit);
                        posts
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, key, "Error fetching posts, rendering without them");
                Vec::new()
            }
        }
    }
}

fn truncate(posts: &[PostRecord], limit: usize) -> Vec<PostRecord> {
    posts.iter().take(limit).cloned().collect()
}
