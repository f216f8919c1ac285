//! Search session state for a single page view.
//!
//! The session owns the query and the fetched collection. The visible subset
//! is never stored: it is recomputed from `(source, query)` whenever it is
//! read, so it cannot drift from the query that produced it.

use serde::Serialize;

use super::filter::{filter_posts, is_blank};
use super::models::PostRecord;

/// What a renderer receives after each query change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub total_count: usize,
    pub query: String,
    pub results: Vec<PostRecord>,
    pub result_count: usize,
}

impl SearchView {
    /// The "N results found" readout is only shown for a non-empty query.
    pub fn shows_result_count(&self) -> bool {
        !self.query.is_empty()
    }

    /// A search is active and nothing matched.
    pub fn shows_no_results(&self) -> bool {
        self.shows_result_count() && self.result_count == 0
    }
}

/// Receives the recomputed view synchronously after `set_query`.
pub trait SearchObserver: Send {
    fn on_view_changed(&mut self, view: &SearchView);
}

impl<F> SearchObserver for F
where
    F: FnMut(&SearchView) + Send,
{
    fn on_view_changed(&mut self, view: &SearchView) {
        self(view)
    }
}

pub struct SearchSession {
    source: Vec<PostRecord>,
    query: String,
    observers: Vec<Box<dyn SearchObserver>>,
}

impl SearchSession {
    /// Start a session over `source` with an empty query (everything visible).
    pub fn new(source: Vec<PostRecord>) -> Self {
        Self {
            source,
            query: String::new(),
            observers: Vec::new(),
        }
    }

    /// Register a renderer callback.
    pub fn subscribe(&mut self, observer: impl SearchObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the query, recompute the view and notify every observer.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();

        let view = self.snapshot();
        tracing::debug!(
            query = %self.query,
            result_count = view.result_count,
            total_count = view.total_count,
            "Search view recomputed"
        );

        for observer in &mut self.observers {
            observer.on_view_changed(&view);
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn total_count(&self) -> usize {
        self.source.len()
    }

    /// Posts matching the current query, in source order.
    pub fn view(&self) -> Vec<PostRecord> {
        filter_posts(&self.source, &self.query)
    }

    pub fn is_searching(&self) -> bool {
        !is_blank(&self.query)
    }

    pub fn snapshot(&self) -> SearchView {
        let results = self.view();
        SearchView {
            total_count: self.total_count(),
            query: self.query.clone(),
            result_count: results.len(),
            results,
        }
    }
}
