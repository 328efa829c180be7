use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::components::backgrounds::{AnimatedGradientBackground, GeometricBackground};
use crate::components::error::NotFoundView;
use crate::components::icons::{Icon, IconView};
use crate::components::image::OptimizedImage;
use crate::components::particles::InteractiveParticles;
use crate::components::post::PostCard;
use crate::components::search_bar::SearchBar;
use crate::components::tag::{Tag, TagList, TagVariant};
use crate::projects::filter_status;
use crate::shared::{browser, storage};
use common::anim::Density;
use common::error::SiteError;
use content::blog::share_links;
use content::{BlogCategory, FilterState, blog_posts, find_post, partition_featured};

// likes are local to this browser; the count is a fixed baseline plus your own
const BASE_LIKES: u32 = 42;

fn like_key(slug: &str) -> String {
    format!("liked_{slug}")
}

#[component]
pub fn Blog() -> Element {
    let mut filter = use_signal(FilterState::<BlogCategory>::new);

    let all = blog_posts();
    let state = filter.read().clone();
    let visible = state.apply(all);
    let status = filter_status(visible.len(), all.len(), "posts", state.is_active());
    let (featured, other) = partition_featured(visible.iter().copied());

    rsx! {
        div { style: "position: relative;",
            AnimatedGradientBackground {}
            GeometricBackground { density: Density::Low }

            InteractiveParticles { count: 20,
                section { class: "section container",
                    div { class: "page-header",
                        h1 { class: "page-title",
                            "The "
                            span { class: "gradient-text", "Blog" }
                        }
                        p { class: "page-subtitle",
                            "Thoughts on web development, tooling and the occasional experiment."
                        }
                    }

                    SearchBar::<BlogCategory> { filter, placeholder: "Search posts...", status }

                    if visible.is_empty() {
                        div { class: "empty-state",
                            p { "No posts found matching your criteria." }
                            button { class: "btn btn-primary", onclick: move |_| filter.write().clear(), "Clear Filters" }
                        }
                    }

                    if !featured.is_empty() {
                        div { class: "section",
                            h2 { class: "section-title", "Featured Posts" }
                            div { class: "grid grid-2",
                                for post in featured {
                                    PostCard { key: "{post.id}", post }
                                }
                            }
                        }
                    }

                    if !other.is_empty() {
                        div { class: "section",
                            h2 { class: "section-title", "All Posts" }
                            div { class: "grid",
                                for post in other {
                                    PostCard { key: "{post.id}", post }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BlogPost(slug: String) -> Element {
    let mut liked = use_signal(|| false);
    let mut copied = use_signal(|| false);

    // a different slug reuses this component, so the per-post state is reloaded
    use_effect(use_reactive((&slug,), move |(slug,)| {
        if find_post(&slug).is_none() {
            tracing::info!(%slug, "no such post");
        }
        liked.set(storage::get_local_storage::<bool>(&like_key(&slug)).unwrap_or(false));
        copied.set(false);
    }));

    let Some(post) = find_post(&slug) else {
        return rsx! {
            NotFoundView { error: SiteError::not_found(format!("the post \"{slug}\"")) }
        };
    };

    let page_url = format!("{}{}", browser::origin(), Route::BlogPost { slug: slug.clone() });
    let share = share_links(post.title, &page_url);
    let toc = post.table_of_contents();
    let html = post.html();
    let likes = BASE_LIKES + u32::from(liked());

    rsx! {
        article { class: "container post-layout",
            div {
                Link { to: Route::Blog {}, class: "back-link",
                    IconView { icon: Icon::ArrowLeft }
                    " Back to Blog"
                }

                header { class: "post-header",
                    Tag { label: post.category.to_string(), variant: TagVariant::Purple }
                    h1 { class: "page-title", "{post.title}" }
                    p { class: "page-subtitle", "{post.excerpt}" }
                    div { class: "card-meta",
                        span { "By {post.author}" }
                        span {
                            IconView { icon: Icon::Calendar }
                            " {post.display_date()}"
                        }
                        span {
                            IconView { icon: Icon::Clock }
                            " {post.reading_time} min read"
                        }
                    }
                }

                div { class: "post-hero",
                    OptimizedImage { src: post.image.to_owned(), alt: post.title.to_owned() }
                }

                div { class: "prose", dangerous_inner_html: "{html}" }

                TagList { tags: post.tags }

                section { class: "section glass-card",
                    h2 { class: "section-title", "Comments & Discussion" }
                    p { class: "card-text",
                        "Comments are powered by GitHub Discussions. Share your thoughts or ask a question there."
                    }
                    a {
                        class: "btn btn-secondary",
                        href: "{post.discussion_url()}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        IconView { icon: Icon::Github }
                        " Start Discussion"
                    }
                }
            }

            aside { class: "post-aside",
                if !toc.is_empty() {
                    nav { class: "toc glass-card", "aria-label": "Table of contents",
                        h3 { "Table of Contents" }
                        ul {
                            for entry in toc {
                                li { key: "{entry.anchor}",
                                    a { href: "#{entry.anchor}", "{entry.title}" }
                                }
                            }
                        }
                    }
                }

                div { class: "glass-card",
                    h3 { "Share" }
                    div { class: "share-row",
                        a { class: "icon-btn", href: "{share.twitter}", target: "_blank", rel: "noopener noreferrer", "aria-label": "Share on Twitter",
                            IconView { icon: Icon::Twitter }
                        }
                        a { class: "icon-btn", href: "{share.linkedin}", target: "_blank", rel: "noopener noreferrer", "aria-label": "Share on LinkedIn",
                            IconView { icon: Icon::Linkedin }
                        }
                        a { class: "icon-btn", href: "{share.facebook}", target: "_blank", rel: "noopener noreferrer", "aria-label": "Share on Facebook",
                            IconView { icon: Icon::Facebook }
                        }
                        button {
                            class: "icon-btn",
                            "aria-label": "Copy link",
                            onclick: move |_| {
                                let url = page_url.clone();
                                async move {
                                    match browser::copy_to_clipboard(&url).await {
                                        Ok(()) => copied.set(true),
                                        Err(err) => {
                                            copied.set(false);
                                            tracing::warn!("failed to copy link: {err}");
                                        }
                                    }
                                }
                            },
                            IconView { icon: Icon::Link }
                        }
                    }
                    if copied() {
                        p { class: "card-meta", "Link copied to clipboard" }
                    }

                    button {
                        class: if liked() { "btn btn-primary" } else { "btn btn-ghost" },
                        "aria-pressed": if liked() { "true" } else { "false" },
                        onclick: move |_| {
                            let next = !liked();
                            liked.set(next);
                            storage::set_local_storage(&like_key(post.slug), next);
                        },
                        IconView { icon: Icon::Heart }
                        if liked() { " Liked ({likes})" } else { " Like ({likes})" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_keys_are_per_post() {
        assert_eq!(like_key("modern-css-techniques-2024"), "liked_modern-css-techniques-2024");
        assert_ne!(like_key("a"), like_key("b"));
    }
}
