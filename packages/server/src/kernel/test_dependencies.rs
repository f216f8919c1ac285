// Mock implementations for testing
//
// Provides a scripted post source that records how often it was called.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::error::{PostSourceError, Result};
use super::traits::BasePostSource;
use crate::domains::posts::models::PostRecord;

// =============================================================================
// Mock Post Source
// =============================================================================

#[derive(Debug, Clone)]
enum MockOutcome {
    Posts(Vec<PostRecord>),
    Status(u16),
    Malformed(String),
}

#[derive(Clone)]
pub struct MockPostSource {
    key: String,
    outcome: Arc<Mutex<MockOutcome>>,
    calls: Arc<AtomicUsize>,
}

impl MockPostSource {
    /// A source that answers with `posts` on every call.
    pub fn with_posts(posts: Vec<PostRecord>) -> Self {
        Self {
            key: "mock://posts".to_string(),
            outcome: Arc::new(Mutex::new(MockOutcome::Posts(posts))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source that answers with a non-success status.
    pub fn failing(status: u16) -> Self {
        let source = Self::with_posts(Vec::new());
        source.fail_with_status(status);
        source
    }

    /// A source whose payload does not decode as a post list.
    pub fn malformed(payload: &str) -> Self {
        let source = Self::with_posts(Vec::new());
        *source.outcome.lock().unwrap() = MockOutcome::Malformed(payload.to_string());
        source
    }

    /// Switch subsequent calls to a successful response.
    pub fn respond_with(&self, posts: Vec<PostRecord>) {
        *self.outcome.lock().unwrap() = MockOutcome::Posts(posts);
    }

    /// Switch subsequent calls to a failing response.
    pub fn fail_with_status(&self, status: u16) {
        *self.outcome.lock().unwrap() = MockOutcome::Status(status);
    }

    /// Number of outbound fetches performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BasePostSource for MockPostSource {
    fn cache_key(&self) -> &str {
        &self.key
    }

    async fn fetch_posts(&self) -> Result<Vec<PostRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let outcome = self.outcome.lock().unwrap().clone();
        match outcome {
            MockOutcome::Posts(posts) => Ok(posts),
            MockOutcome::Status(status) => Err(PostSourceError::Status {
                status,
                message: "mock failure".to_string(),
            }),
            MockOutcome::Malformed(payload) => {
                let posts: Vec<PostRecord> = serde_json::from_str(&payload)?;
                Ok(posts)
            }
        }
    }
}

/// Build `count` sequential posts titled "Post N" with a shared body.
pub fn sample_posts(count: usize) -> Vec<PostRecord> {
    (1..=count as i64)
        .map(|i| PostRecord::new(i, format!("Post {}", i), "Lorem ipsum dolor sit amet", (i - 1) / 10 + 1))
        .collect()
}
