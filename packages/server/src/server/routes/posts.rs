use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::home::{open_page, SearchParams};
use crate::domains::posts::SearchView;
use crate::server::app::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub view_id: Uuid,
    #[serde(flatten)]
    pub view: SearchView,
}

/// JSON form of the renderer boundary
///
/// Returns `{ viewId, totalCount, query, results, resultCount }`. Pass the
/// returned `viewId` back as `?view=` to search the same collection.
pub async fn posts_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<PageSnapshot> {
    let handle = open_page(&state, params).await;
    let view = handle.page.lock().await.view();

    Json(PageSnapshot {
        view_id: handle.id,
        view,
    })
}
