use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domains::posts::PageHandle;
use crate::server::app::AppState;
use crate::server::render::render_home_page;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    /// Page view to resume; unknown or malformed ids start a new view
    pub view: Option<String>,
}

impl SearchParams {
    pub fn view_id(&self) -> Option<Uuid> {
        self.view.as_deref().and_then(|v| v.parse().ok())
    }
}

/// Resume (or open) the page view and apply the query change, if any.
pub async fn open_page(state: &AppState, params: SearchParams) -> PageHandle {
    let handle = state
        .views
        .resume_or_compose(&state.composer, params.view_id())
        .await;

    if let Some(query) = params.q {
        handle.page.lock().await.session.set_query(query);
    }

    handle
}

/// Server-rendered home page
///
/// A request without a live `view` id is a new page view: posts are fetched
/// before the first byte is produced. With one, `?q=` re-filters the posts
/// that view already fetched.
pub async fn home_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let handle = open_page(&state, params).await;
    let page = handle.page.lock().await;

    Html(render_home_page(handle.id, &page))
}
