//! Server-side HTML rendering.
//!
//! Pages are dioxus components rendered to strings with `dioxus_ssr`, which
//! escapes interpolated text and attribute values. Components are pure
//! consumers of `SearchView`; every decision about what is visible is made
//! by the posts domain.

#![allow(non_snake_case)]

pub mod home;
pub mod layout;
pub mod post_card;

pub use home::{render_home_page, HomeDocument, SearchResults};
pub use layout::Layout;
pub use post_card::PostCard;
