use dioxus::prelude::*;

use crate::components::icons::{Icon, IconView};
use common::error::SiteError;

// lazy image that swaps itself for a placeholder if the source fails to load
#[component]
pub fn OptimizedImage(
    src: String,
    alt: String,
    #[props(default)] class: String,
) -> Element {
    let mut loaded = use_signal(|| false);
    let mut failed = use_signal(|| false);

    // a new source gets a fresh attempt
    use_effect(use_reactive((&src,), move |_| {
        loaded.set(false);
        failed.set(false);
    }));

    let src_for_error = src.clone();

    rsx! {
        div { class: "image-frame {class}",
            if failed() {
                div {
                    class: "image-placeholder",
                    role: "img",
                    "aria-label": "{alt}",
                    IconView { icon: Icon::Image }
                }
            } else {
                img {
                    class: if loaded() { "" } else { "loading" },
                    src: "{src}",
                    alt: "{alt}",
                    loading: "lazy",
                    onload: move |_| loaded.set(true),
                    onerror: move |_| {
                        let err = SiteError::Asset {
                            src: src_for_error.clone(),
                        };
                        tracing::warn!("{err}");
                        failed.set(true);
                    },
                }
            }
        }
    }
}
