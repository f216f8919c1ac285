//! Post card component

use dioxus::prelude::*;

use crate::domains::posts::PostRecord;

#[derive(Props, Clone, PartialEq)]
pub struct PostCardProps {
    pub post: PostRecord,
}

/// One post: number badge, author, title and body
#[component]
pub fn PostCard(props: PostCardProps) -> Element {
    let post = &props.post;

    rsx! {
        article {
            class: "post-card",
            div {
                class: "post-meta",
                span { class: "post-badge", "Post #{post.id}" }
                span { class: "post-author", "User {post.author_id}" }
            }
            h3 { class: "post-title", "{post.title}" }
            p { class: "post-body", "{post.body}" }
        }
    }
}
