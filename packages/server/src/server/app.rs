//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::posts::{PageComposer, PostProvider, ViewStore};
use crate::kernel::ServerDeps;
use crate::server::routes::{
    echo_handler, echo_status_handler, health_handler, home_handler, posts_handler,
};
use crate::server::static_files::serve_static;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<PageComposer>,
    pub views: Arc<ViewStore>,
}

impl AppState {
    pub fn new(deps: &ServerDeps) -> Self {
        let provider = PostProvider::from_deps(deps);
        Self {
            composer: Arc::new(PageComposer::new(provider)),
            views: Arc::new(ViewStore::default()),
        }
    }
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AppState::new(&deps);

    // CORS configuration - the echo API is callable from any origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(home_handler))
        .route("/api/posts", get(posts_handler))
        .route("/api/echo", get(echo_status_handler).post(echo_handler))
        .route("/health", get(health_handler))
        .route("/static/*path", get(serve_static))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
