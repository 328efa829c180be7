use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::components::icons::{Icon, IconView};
use common::route::nav_items;
use content::SITE_NAME;
use content::profile::{contact_details, profile, social_links};

#[component]
pub fn Footer() -> Element {
    let me = profile();
    let year = chrono::Utc::now().year();

    rsx! {
        footer { class: "app-footer",
            div { class: "container footer-grid",
                div {
                    h3 { class: "gradient-text", "{SITE_NAME}" }
                    p { class: "card-text", "{me.headline}" }
                    div { class: "hero-social",
                        for link in social_links().iter() {
                            a {
                                key: "{link.name}",
                                class: "icon-btn",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": "{link.name}",
                                IconView { icon: link.glyph.into() }
                            }
                        }
                    }
                }

                div {
                    h4 { "Quick Links" }
                    ul {
                        for item in nav_items().iter() {
                            li { key: "{item.path}",
                                Link { to: item.path, "{item.name}" }
                            }
                        }
                    }
                }

                div {
                    h4 { "Get in Touch" }
                    ul {
                        for detail in contact_details().iter() {
                            li { key: "{detail.label}", class: "contact-detail",
                                IconView { icon: detail.glyph.into() }
                                if let Some(href) = detail.href {
                                    a { href: "{href}", "{detail.value}" }
                                } else {
                                    span { "{detail.value}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "container footer-bottom",
                span { "© {year} {SITE_NAME}. All rights reserved." }
                span {
                    "Made with "
                    IconView { icon: Icon::Heart }
                    " and Rust"
                }
            }
        }
    }
}
