// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Fail-soft policy, truncation and caching live in domains::posts::provider.

use async_trait::async_trait;

use super::error::PostSourceError;
use crate::domains::posts::models::PostRecord;

// =============================================================================
// Post Source Trait (Infrastructure - remote post collection)
// =============================================================================

#[async_trait]
pub trait BasePostSource: Send + Sync {
    /// Stable key identifying the outbound request (used by the fetch cache)
    fn cache_key(&self) -> &str;

    /// Fetch the full collection in source order
    async fn fetch_posts(&self) -> Result<Vec<PostRecord>, PostSourceError>;
}
