//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod error;
pub mod post_cache;
pub mod post_source_client;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use error::PostSourceError;
pub use post_cache::PostCache;
pub use post_source_client::{HttpPostSource, DEFAULT_POSTS_URL};
pub use test_dependencies::{sample_posts, MockPostSource};
pub use traits::*;
