use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::components::icons::{Icon, IconView};
use crate::components::image::OptimizedImage;
use crate::components::tag::{Tag, TagList, TagVariant};
use content::BlogPost;

#[component]
pub fn PostCard(post: &'static BlogPost) -> Element {
    rsx! {
        article { class: "card",
            Link {
                to: Route::BlogPost { slug: post.slug.to_owned() },
                div { class: "post-image",
                    OptimizedImage { src: post.image.to_owned(), alt: post.title.to_owned() }
                }
            }
            div { class: "card-body",
                div { class: "card-meta",
                    Tag { label: post.category.to_string(), variant: TagVariant::Purple }
                    span {
                        IconView { icon: Icon::Calendar }
                        " {post.display_date()}"
                    }
                    span {
                        IconView { icon: Icon::Clock }
                        " {post.reading_time} min read"
                    }
                }
                h3 { class: "card-title",
                    Link { to: Route::BlogPost { slug: post.slug.to_owned() }, "{post.title}" }
                }
                p { class: "card-text", "{post.excerpt}" }
                TagList { tags: post.tags }
                Link {
                    class: "back-link",
                    to: Route::BlogPost { slug: post.slug.to_owned() },
                    "Read more "
                    IconView { icon: Icon::ArrowRight }
                }
            }
        }
    }
}
