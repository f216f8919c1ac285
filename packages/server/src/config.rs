use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::kernel::DEFAULT_POSTS_URL;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub posts_source_url: String,
    /// `None` when `POSTS_CACHE_TTL_SECS=0`
    pub posts_cache_ttl: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let posts_source_url =
            lookup("POSTS_SOURCE_URL").unwrap_or_else(|| DEFAULT_POSTS_URL.to_string());

        let ttl_secs: u64 = lookup("POSTS_CACHE_TTL_SECS")
            .unwrap_or_else(|| "3600".to_string())
            .parse()
            .context("POSTS_CACHE_TTL_SECS must be a whole number of seconds")?;
        let posts_cache_ttl = (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs));

        Ok(Self {
            port,
            posts_source_url,
            posts_cache_ttl,
        })
    }
}
