use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::components::error::ErrorView;
use crate::components::footer::Footer;
use crate::components::icons::{Icon, IconView};
use crate::components::scroll_progress::ScrollProgress;
use crate::components::scroll_top::ScrollToTop;
use crate::shared::{browser, theme};
use common::error::SiteError;
use common::route::{NavItem, nav_items, resolve_known};
use content::{SITE_NAME, find_post};

// the <title> for a route; posts use their own title
fn document_title(route: &Route) -> String {
    let title = match route {
        Route::BlogPost { slug } => find_post(slug).map(|post| post.title),
        _ => None,
    };
    let title = title.unwrap_or_else(|| resolve_known(&route.to_string()).title());

    format!("{title} | {SITE_NAME}")
}

// a nav item is active on its own page and, except for home, on anything nested below it
fn is_active(item: &NavItem, current: &str) -> bool {
    match item.path {
        "/" => current == "/",
        path => current == path || current.starts_with(&format!("{path}/")),
    }
}

#[component]
fn NavBarButton(item: NavItem, on_navigate: EventHandler<()>) -> Element {
    let current_path: Route = use_route();

    rsx! {
        Link {
            class: if is_active(&item, &current_path.to_string()) { "nav-link active" } else { "nav-link" },
            to: item.path,
            onclick: move |_| on_navigate.call(()),
            "{item.name}"
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let theme = theme::use_theme();
    let dark = theme.read().get().is_dark();

    rsx! {
        button {
            class: "icon-btn",
            "aria-label": if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                theme::toggle(theme);
            },
            if dark {
                IconView { icon: Icon::Sun }
            } else {
                IconView { icon: Icon::Moon }
            }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {}, span { class: "gradient-text", "{SITE_NAME}" } }
                }

                nav { class: "nav-links",
                    for item in nav_items().iter().copied() {
                        NavBarButton { key: "{item.path}", item, on_navigate: move |_| {} }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle {}
                    button {
                        class: "icon-btn menu-toggle",
                        "aria-label": "Toggle menu",
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            IconView { icon: Icon::Close }
                        } else {
                            IconView { icon: Icon::Menu }
                        }
                    }
                }
            }

            nav { class: if menu_open() { "mobile-menu open" } else { "mobile-menu" },
                for item in nav_items().iter().copied() {
                    NavBarButton {
                        key: "{item.path}",
                        item,
                        on_navigate: move |_| menu_open.set(false),
                    }
                }
            }
        }
    }
}

// layout shared by every page
//
// page render failures are caught here so the header and footer survive them
#[component]
pub fn NavBar() -> Element {
    let route: Route = use_route();

    use_effect(use_reactive((&route,), |(route,)| {
        tracing::debug!(%route, "navigated");
        browser::scroll_to_top();
    }));

    let title = document_title(&route);

    rsx! {
        document::Title { "{title}" }
        ScrollProgress {}
        NavBarInner {}
        main { class: "page",
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| {
                    let detail = format!("{:?}", errors.errors());
                    tracing::error!("page failed to render: {detail}");

                    rsx! {
                        ErrorView {
                            error: SiteError::Render(detail),
                            on_recover: move |_| errors.clear_errors(),
                        }
                    }
                },
                Outlet::<Route> {}
            }
        }
        Footer {}
        ScrollToTop {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_nav_item() {
        let home = NavItem { name: "Home", path: "/" };
        let blog = NavItem { name: "Blog", path: "/blog" };

        assert!(is_active(&home, "/"));
        assert!(!is_active(&home, "/blog"));
        assert!(is_active(&blog, "/blog"));
        assert!(is_active(&blog, "/blog/modern-css-techniques-2024"));
        assert!(!is_active(&blog, "/blogroll"));
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title(&Route::About {}), format!("About | {SITE_NAME}"));
        assert_eq!(
            document_title(&Route::BlogPost {
                slug: "missing".to_owned()
            }),
            format!("404 - Page Not Found | {SITE_NAME}")
        );
    }
}
