#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod shared;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod about;
use about::About;

mod projects;
use projects::Projects;

mod blog;
use blog::{Blog, BlogPost};

mod contact;
use contact::Contact;

mod not_found;
use not_found::NotFound;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/projects")]
        Projects {},
        #[route("/blog")]
        Blog {},
        #[route("/blog/:slug")]
        BlogPost { slug: String },
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    shared::theme::use_theme_provider();

    rsx! {
        style { "{shared::style::SITE_STYLES}" }
        // last line of defence; page failures are normally caught inside the layout
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                tracing::error!("application failed to render: {:?}", errors.errors());
                rsx! {
                    div { class: "container error-page",
                        h1 { class: "page-title", "Something went wrong" }
                        p { class: "page-subtitle", "Please reload the page." }
                        a { class: "btn btn-primary", href: "/", "Go Home" }
                    }
                }
            },
            Router::<Route> { config: RouterConfig::default }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use common::route::{Page, resolve, resolve_known};

    #[test]
    fn test_routes_agree_with_route_table() {
        for page in Page::static_pages() {
            let route = Route::from_str(&page.path()).unwrap();
            assert_eq!(route.to_string(), page.path());
        }
    }

    #[test]
    fn test_blog_post_route() {
        let route = Route::from_str("/blog/modern-css-techniques-2024").unwrap();
        assert_eq!(
            route,
            Route::BlogPost {
                slug: "modern-css-techniques-2024".to_owned()
            }
        );
        assert!(resolve_known(&route.to_string()).is_found());
    }

    #[test]
    fn test_unmatched_paths_hit_catch_all() {
        for path in ["/nope", "/about/me", "/projects/1"] {
            let route = Route::from_str(path).unwrap();
            assert!(matches!(route, Route::NotFound { .. }), "{path}");
            assert_eq!(resolve(path).status(), 404);
        }
    }
}
