use dioxus::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::project::{ProjectCard, ProjectModal};
use crate::components::search_bar::SearchBar;
use content::{FilterState, Project, ProjectCategory, partition_featured, projects};

// "3 of 6 projects", or nothing when no filter is set
pub(crate) fn filter_status(shown: usize, total: usize, noun: &str, active: bool) -> String {
    if active {
        format!("{shown} of {total} {noun}")
    } else {
        String::new()
    }
}

#[component]
pub fn Projects() -> Element {
    let mut filter = use_signal(FilterState::<ProjectCategory>::new);
    let mut selected = use_signal(|| None::<&'static Project>);

    let all = projects();
    let state = filter.read().clone();
    let visible = state.apply(all);
    let status = filter_status(visible.len(), all.len(), "projects", state.is_active());
    let (featured, other) = partition_featured(visible.iter().copied());

    rsx! {
        section { class: "section container",
            div { class: "page-header",
                h1 { class: "page-title",
                    "My "
                    span { class: "gradient-text", "Projects" }
                }
                p { class: "page-subtitle",
                    "Things I've designed and built, from production platforms to weekend experiments."
                }
            }

            SearchBar::<ProjectCategory> { filter, placeholder: "Search projects...", status }

            if visible.is_empty() {
                div { class: "empty-state",
                    IconView { icon: Icon::Code }
                    p { "No projects found matching your criteria." }
                    button { class: "btn btn-primary", onclick: move |_| filter.write().clear(), "Clear Filters" }
                }
            }

            if !featured.is_empty() {
                div { class: "section",
                    h2 { class: "section-title", "Featured" }
                    div { class: "grid grid-2",
                        for project in featured {
                            ProjectCard {
                                key: "{project.id}",
                                project,
                                on_select: move |project| selected.set(Some(project)),
                            }
                        }
                    }
                }
            }

            if !other.is_empty() {
                div { class: "section",
                    h2 { class: "section-title", "More Projects" }
                    div { class: "grid",
                        for project in other {
                            ProjectCard {
                                key: "{project.id}",
                                project,
                                on_select: move |project| selected.set(Some(project)),
                            }
                        }
                    }
                }
            }
        }

        if let Some(project) = selected() {
            ProjectModal { project, on_close: move |_| selected.set(None) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_status_only_when_filtering() {
        assert_eq!(filter_status(6, 6, "projects", false), "");
        assert_eq!(filter_status(2, 6, "projects", true), "2 of 6 projects");
    }
}
