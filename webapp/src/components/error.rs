use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::components::icons::{Icon, IconView};
use common::error::SiteError;
use common::route::nav_items;

#[component]
fn PopularPages() -> Element {
    rsx! {
        section { class: "section",
            h2 { class: "section-title", "Popular pages" }
            div { class: "error-links",
                for item in nav_items().iter() {
                    Link { key: "{item.path}", class: "btn btn-secondary", to: item.path, "{item.name}" }
                }
            }
        }
    }
}

// shown in place of a page that failed; the recovery link also resets the boundary
#[component]
pub fn ErrorView(error: SiteError, on_recover: EventHandler<()>) -> Element {
    let recovery = error.recovery().path();

    rsx! {
        div { class: "container error-page",
            div { class: "error-code", "{error.status()}" }
            h1 { class: "page-title", "{error.heading()}" }
            p { class: "page-subtitle", "{error.user_message()}" }
            div { class: "hero-actions",
                Link {
                    class: "btn btn-primary",
                    to: recovery,
                    onclick: move |_| on_recover.call(()),
                    "Go Home"
                }
            }
        }
    }
}

// 404 body, shared by unmatched paths and unknown blog posts
#[component]
pub fn NotFoundView(error: SiteError) -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "container error-page",
            div { class: "error-code", "404" }
            h1 { class: "page-title", "{error.heading()}" }
            p { class: "page-subtitle", "{error.user_message()}" }

            div { class: "hero-actions",
                Link { class: "btn btn-primary", to: error.recovery().path(), "Go Home" }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| navigator.go_back(),
                    IconView { icon: Icon::ArrowLeft }
                    " Go Back"
                }
            }

            PopularPages {}
        }
    }
}
