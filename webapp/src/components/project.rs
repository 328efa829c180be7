use dioxus::prelude::*;

use crate::components::card3d::Card3D;
use crate::components::icons::{Icon, IconView};
use crate::components::image::OptimizedImage;
use crate::components::modal::{Modal, ModalSize};
use crate::components::tag::{Tag, TagList, TagVariant};
use content::Project;

#[component]
fn ProjectLinks(project: &'static Project) -> Element {
    rsx! {
        div { class: "card-links",
            if let Some(repo) = project.repository {
                a {
                    class: "btn btn-secondary",
                    href: "{repo}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: move |evt| evt.stop_propagation(),
                    IconView { icon: Icon::Github }
                    " Code"
                }
            }
            if let Some(demo) = project.demo {
                a {
                    class: "btn btn-primary",
                    href: "{demo}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: move |evt| evt.stop_propagation(),
                    IconView { icon: Icon::ExternalLink }
                    " Live Demo"
                }
            }
        }
    }
}

// grid card; featured cards tilt and show more tags
#[component]
pub fn ProjectCard(project: &'static Project, on_select: EventHandler<&'static Project>) -> Element {
    let (tags, hidden) = project.tag_preview(if project.featured { 4 } else { 3 });

    let body = rsx! {
        div {
            class: "card",
            role: "button",
            tabindex: "0",
            onclick: move |_| on_select.call(project),
            onkeydown: move |evt| {
                if evt.key() == Key::Enter {
                    on_select.call(project);
                }
            },
            div { class: "project-image",
                OptimizedImage { src: project.image.to_owned(), alt: project.title.to_owned() }
                div { class: "project-badges",
                    if project.featured {
                        Tag { label: "Featured".to_owned(), variant: TagVariant::Purple }
                    }
                    if project.is_wip() {
                        Tag { label: project.status.label().to_owned(), variant: TagVariant::Pink }
                    }
                }
            }
            div { class: "card-body",
                div { class: "card-meta",
                    span { "{project.category}" }
                    span { "{project.year}" }
                }
                h3 { class: "card-title", "{project.title}" }
                p { class: "card-text", "{project.description}" }
                TagList { tags, overflow: hidden }
                ProjectLinks { project }
            }
        }
    };

    if project.featured {
        rsx! {
            Card3D { {body} }
        }
    } else {
        body
    }
}

#[component]
pub fn ProjectModal(project: &'static Project, on_close: EventHandler<()>) -> Element {
    rsx! {
        Modal { title: project.title.to_owned(), size: ModalSize::Large, on_close,
            div { class: "project-detail-image",
                OptimizedImage { src: project.image.to_owned(), alt: project.title.to_owned() }
            }
            div { class: "tag-list",
                Tag { label: project.category.to_string(), variant: TagVariant::Primary }
                Tag {
                    label: project.status.label().to_owned(),
                    variant: if project.is_wip() { TagVariant::Pink } else { TagVariant::Green },
                }
                Tag { label: project.year.to_string(), variant: TagVariant::Muted }
            }
            p { class: "card-text", "{project.long_description}" }
            h4 { "Technologies" }
            TagList { tags: project.tags }
            ProjectLinks { project }
        }
    }
}
