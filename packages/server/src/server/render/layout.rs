//! Document shell shared by every page

use dioxus::prelude::*;

pub const SITE_TITLE: &str = "QuickFetch";
const SITE_TAGLINE: &str = "Rust + axum Mini App Demo";
const SITE_DESCRIPTION: &str = "A mini app showcasing server-side rendering and search";

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    pub children: Element,
}

#[component]
pub fn Layout(props: LayoutProps) -> Element {
    rsx! {
        html {
            lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                meta { name: "description", content: SITE_DESCRIPTION }
                title { "{SITE_TITLE}" }
                link { rel: "stylesheet", href: "/static/globals.css" }
            }
            body {
                div {
                    class: "page",

                    // Header - appears on every page
                    header {
                        class: "site-header",
                        div {
                            class: "container",
                            h1 { "{SITE_TITLE}" }
                            p { class: "tagline", "{SITE_TAGLINE}" }
                        }
                    }

                    main { {props.children} }
                }
            }
        }
    }
}
