//! Live page views.
//!
//! A page view fetches its posts once; later query changes for the same view
//! (identified by the `view` id carried in the search form) re-filter that
//! collection instead of going back to the source. Views idle longer than
//! `VIEW_IDLE_TIMEOUT` are torn down.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::page::{HomePage, PageComposer};

pub const VIEW_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

const MAX_VIEWS: u64 = 10_000;

/// A page view and the id that resumes it.
#[derive(Clone)]
pub struct PageHandle {
    pub id: Uuid,
    pub page: Arc<Mutex<HomePage>>,
}

pub struct ViewStore {
    views: Cache<Uuid, Arc<Mutex<HomePage>>>,
}

impl ViewStore {
    pub fn new(idle_timeout: Duration) -> Self {
        let views = Cache::builder()
            .max_capacity(MAX_VIEWS)
            .time_to_idle(idle_timeout)
            .build();
        Self { views }
    }

    /// Resume view `id` if it is still live, otherwise start a new page view.
    ///
    /// Only a new view reaches the post source.
    pub async fn resume_or_compose(&self, composer: &PageComposer, id: Option<Uuid>) -> PageHandle {
        if let Some(id) = id {
            if let Some(page) = self.views.get(&id) {
                return PageHandle { id, page };
            }
            tracing::debug!(view_id = %id, "Unknown or expired view, composing a new one");
        }

        let page = composer.compose().await;
        self.register(page)
    }

    pub fn register(&self, page: HomePage) -> PageHandle {
        let id = Uuid::new_v4();
        let page = Arc::new(Mutex::new(page));
        self.views.insert(id, page.clone());
        tracing::debug!(view_id = %id, "Page view opened");
        PageHandle { id, page }
    }
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new(VIEW_IDLE_TIMEOUT)
    }
}
