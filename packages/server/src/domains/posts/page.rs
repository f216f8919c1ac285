//! Home page composition: fetch once, then hand the posts to a search session.

use super::provider::PostProvider;
use super::session::{SearchSession, SearchView};

/// Posts shown per page view.
pub const POSTS_PER_PAGE: usize = 10;

#[derive(Clone)]
pub struct PageComposer {
    provider: PostProvider,
}

impl PageComposer {
    pub fn new(provider: PostProvider) -> Self {
        Self { provider }
    }

    /// Fetch the posts (exactly once) and build the page around them.
    ///
    /// The fetch completes before anything is returned, so the first render
    /// already carries data.
    pub async fn compose(&self) -> HomePage {
        let posts = self.provider.fetch_posts(POSTS_PER_PAGE).await;
        HomePage {
            session: SearchSession::new(posts),
        }
    }
}

/// Renderable state of one home page view.
pub struct HomePage {
    pub session: SearchSession,
}

impl HomePage {
    /// Count shown in the "Latest Posts (N)" header.
    pub fn total_count(&self) -> usize {
        self.session.total_count()
    }

    /// The "No posts available" element, shown only when the fetch produced nothing.
    pub fn shows_no_posts_fallback(&self) -> bool {
        self.session.total_count() == 0
    }

    pub fn view(&self) -> SearchView {
        self.session.snapshot()
    }
}
