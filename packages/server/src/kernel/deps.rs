//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to `build_app`. The post source is a
//! trait object so tests can swap in `MockPostSource`.

use std::sync::Arc;

use crate::config::Config;
use crate::kernel::{BasePostSource, HttpPostSource, PostCache};

#[derive(Clone)]
pub struct ServerDeps {
    pub post_source: Arc<dyn BasePostSource>,
    /// Fetch cache; `None` makes every page load hit the source
    pub post_cache: Option<Arc<PostCache>>,
}

impl ServerDeps {
    pub fn new(post_source: Arc<dyn BasePostSource>, post_cache: Option<Arc<PostCache>>) -> Self {
        Self {
            post_source,
            post_cache,
        }
    }

    /// Real dependencies: HTTP source plus a TTL cache unless disabled.
    pub fn from_config(config: &Config) -> Self {
        let post_source: Arc<dyn BasePostSource> =
            Arc::new(HttpPostSource::new(config.posts_source_url.clone()));

        let post_cache = config.posts_cache_ttl.map(|ttl| Arc::new(PostCache::new(ttl)));
        match &post_cache {
            Some(cache) => tracing::info!(ttl_secs = cache.ttl().as_secs(), "Post cache enabled"),
            None => tracing::info!("Post cache disabled"),
        }

        Self::new(post_source, post_cache)
    }
}
