//! Home page: count header, search form, results and fallbacks

use dioxus::prelude::*;
use uuid::Uuid;

use super::layout::Layout;
use super::post_card::PostCard;
use crate::domains::posts::{HomePage, SearchView};

pub const SEARCH_PLACEHOLDER: &str = "Search posts by title or content...";
pub const NO_POSTS_MESSAGE: &str = "No posts available.";
pub const NO_RESULTS_MESSAGE: &str = "No posts found matching your search.";

/// Full HTML document for one page view.
pub fn render_home_page(view_id: Uuid, page: &HomePage) -> String {
    let view_id = view_id.to_string();
    let view = page.view();
    let show_no_posts = page.shows_no_posts_fallback();

    let body = dioxus_ssr::render_element(rsx! {
        HomeDocument { view_id, view, show_no_posts }
    });
    format!("<!DOCTYPE html>{}", body)
}

#[derive(Props, Clone, PartialEq)]
pub struct HomeDocumentProps {
    pub view_id: String,
    pub view: SearchView,
    pub show_no_posts: bool,
}

#[component]
pub fn HomeDocument(props: HomeDocumentProps) -> Element {
    let total_count = props.view.total_count;

    rsx! {
        Layout {
            div {
                class: "container",
                section {
                    class: "section",
                    h2 { class: "section-title", "Latest Posts ({total_count})" }
                    SearchResults { view_id: props.view_id.clone(), view: props.view.clone() }
                }

                // Fallback: the fetch produced nothing
                if props.show_no_posts {
                    div {
                        class: "empty-state",
                        p { "{NO_POSTS_MESSAGE}" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SearchResultsProps {
    pub view_id: String,
    pub view: SearchView,
}

/// Search form, result readout, post grid and the no-results message
#[component]
pub fn SearchResults(props: SearchResultsProps) -> Element {
    let view = &props.view;
    let query = &view.query;
    let result_count = view.result_count;

    rsx! {
        div {
            class: "search",
            form {
                method: "get",
                action: "/",
                class: "search-form",
                // Query changes resume this view instead of fetching again
                input { r#type: "hidden", name: "view", value: "{props.view_id}" }
                input {
                    r#type: "text",
                    name: "q",
                    value: "{query}",
                    placeholder: SEARCH_PLACEHOLDER,
                    autocomplete: "off"
                }
            }
            if view.shows_result_count() {
                p {
                    class: "result-count",
                    "Found {result_count} post(s) matching \"{query}\""
                }
            }
        }

        div {
            class: "post-grid",
            for post in view.results.iter() {
                PostCard { key: "{post.id}", post: post.clone() }
            }
        }

        if view.shows_no_results() {
            div {
                class: "empty-state",
                p { "{NO_RESULTS_MESSAGE}" }
            }
        }
    }
}
