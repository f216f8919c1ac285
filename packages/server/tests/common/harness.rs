//! Test harness driving the router in-process.
//!
//! `TestHarness` wraps the real application router over a `MockPostSource`;
//! `spawn_post_source` starts a local HTTP server that stands in for the
//! remote post API so the reqwest client can be exercised end to end.
//!
//! Shared setup (tracing, fixture collection) runs once on the first test.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    routing::get,
    Router,
};
use quickfetch_core::domains::posts::PostRecord;
use quickfetch_core::kernel::{MockPostSource, PostCache, ServerDeps};
use quickfetch_core::server::build_app;
use test_context::AsyncTestContext;
use tokio::sync::OnceCell;
use tower::ServiceExt;

use super::fixtures::demo_posts;

/// Shared test setup, initialized once and reused by all tests.
struct SharedTestInfra {
    demo_posts: Vec<PostRecord>,
}

static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    fn init() -> Self {
        init_tracing();
        Self {
            demo_posts: demo_posts(),
        }
    }

    async fn get() -> &'static Self {
        SHARED_INFRA.get_or_init(|| async { Self::init() }).await
    }
}

/// Router over a mock post source.
///
/// With test-context, each test gets a fresh app over the demo posts, no
/// cache. Reconfigure through `ctx.source` or use the constructors below.
///
/// ```ignore
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let (status, html) = ctx.get("/").await;
/// }
/// ```
pub struct TestHarness {
    pub app: Router,
    pub source: MockPostSource,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        let infra = SharedTestInfra::get().await;
        Self::with_posts(infra.demo_posts.clone())
    }

    async fn teardown(self) {}
}

impl TestHarness {
    /// App over a source that returns `posts`, without a fetch cache.
    pub fn with_posts(posts: Vec<PostRecord>) -> Self {
        Self::build(MockPostSource::with_posts(posts), None)
    }

    /// App over a source that always fails with `status`.
    pub fn with_failing_source(status: u16) -> Self {
        Self::build(MockPostSource::failing(status), None)
    }

    pub fn with_cache(posts: Vec<PostRecord>) -> Self {
        Self::build(
            MockPostSource::with_posts(posts),
            Some(Arc::new(PostCache::default())),
        )
    }

    fn build(source: MockPostSource, cache: Option<Arc<PostCache>>) -> Self {
        init_tracing();
        let deps = ServerDeps::new(Arc::new(source.clone()), cache);
        Self {
            app: build_app(deps),
            source,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, content_type: Option<&str>, body: &str) -> (StatusCode, String) {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let request = builder
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).expect("JSON response"))
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
    }
}

/// A local stand-in for the remote post API.
pub struct FakePostSource {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl FakePostSource {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serve `body` with `status` at `/posts` on an ephemeral port.
pub async fn spawn_post_source(status: StatusCode, body: String) -> FakePostSource {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    let app = Router::new().route(
        "/posts",
        get(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let body = body.clone();
            async move { (status, [(CONTENT_TYPE, "application/json")], body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake post source");
    });

    FakePostSource {
        url: format!("http://{}/posts", addr),
        hits,
    }
}

/// An address nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/posts", addr)
}

/// The page view id carried by the search form's hidden `view` input.
pub fn view_id_from_html(html: &str) -> String {
    html.split('<')
        .find(|tag| tag.starts_with("input") && tag.contains(r#"name="view""#))
        .and_then(|tag| tag.split(r#"value=""#).nth(1))
        .and_then(|rest| rest.split('"').next())
        .expect("search form carries a view id")
        .to_string()
}

/// Respects RUST_LOG; run with `RUST_LOG=debug cargo test -- --nocapture`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
