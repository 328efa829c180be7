use std::{fmt, sync::LazyLock};

use serde::{Deserialize, Serialize};

// the public url surface of the site
//
// the webapp has its own Routable enum that drives rendering; this table is the
// framework-free description of the same paths, used wherever a path has to be
// classified without a browser -- the preview server, the bundle builder, and the
// "popular pages" list on the 404 page
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Home,
    About,
    Projects,
    Blog,
    BlogPost { slug: String },
    Contact,
    NotFound { path: String },
}

#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub name: &'static str,
    // builds the page from the captured parameter, empty for static patterns
    page: fn(String) -> Page,
}

impl RouteEntry {
    pub fn is_static(&self) -> bool {
        !self.pattern.contains(':')
    }

    // the captured parameter when every segment lines up with the pattern
    fn capture<'a>(&self, segments: &[&'a str]) -> Option<Option<&'a str>> {
        let parts: Vec<&str> = self.pattern.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != segments.len() {
            return None;
        }

        let mut param = None;
        for (part, segment) in parts.iter().zip(segments) {
            if part.starts_with(':') {
                param = Some(*segment);
            } else if part != segment {
                return None;
            }
        }
        Some(param)
    }
}

// the one list of paths the site answers; resolve(), static_pages() and the
// navigation all read from it
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { pattern: "/", name: "Home", page: |_| Page::Home },
    RouteEntry { pattern: "/about", name: "About", page: |_| Page::About },
    RouteEntry { pattern: "/projects", name: "Projects", page: |_| Page::Projects },
    RouteEntry { pattern: "/blog", name: "Blog", page: |_| Page::Blog },
    RouteEntry { pattern: "/blog/:slug", name: "BlogPost", page: |slug| Page::BlogPost { slug } },
    RouteEntry { pattern: "/contact", name: "Contact", page: |_| Page::Contact },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

static NAV_ITEMS: LazyLock<Vec<NavItem>> = LazyLock::new(|| {
    ROUTES
        .iter()
        .filter(|entry| entry.is_static())
        .map(|entry| NavItem {
            name: entry.name,
            path: entry.pattern,
        })
        .collect()
});

pub fn nav_items() -> &'static [NavItem] {
    &NAV_ITEMS
}

pub fn resolve(path: &str) -> Page {
    let path = strip_suffixes(path);
    let not_found = || Page::NotFound {
        path: path.to_owned(),
    };

    // one leading and one trailing slash are optional; any other empty segment
    // (a doubled slash) matches nothing
    let trimmed = path.strip_prefix('/').unwrap_or(path);

    let mut segments: Vec<&str> = if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    };
    if segments.len() > 1 && segments.last() == Some(&"") {
        segments.pop();
    }
    if segments.iter().any(|s| s.is_empty()) {
        return not_found();
    }

    for entry in ROUTES {
        let Some(param) = entry.capture(&segments) else {
            continue;
        };

        let param = match param {
            Some(raw) => match urlencoding::decode(raw) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => return not_found(),
            },
            None => String::new(),
        };
        return (entry.page)(param);
    }

    not_found()
}

// like resolve(), but a blog post whose slug the lookup does not know becomes NotFound
pub fn resolve_with<F>(path: &str, post_exists: F) -> Page
where
    F: Fn(&str) -> bool,
{
    match resolve(path) {
        Page::BlogPost { slug } if !post_exists(&slug) => Page::NotFound {
            path: strip_suffixes(path).to_owned(),
        },
        page => page,
    }
}

// resolve against the posts that actually exist on this site
pub fn resolve_known(path: &str) -> Page {
    resolve_with(path, |slug| content::find_post(slug).is_some())
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

impl Page {
    // canonical path; NotFound keeps whatever path was requested
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_owned(),
            Page::About => "/about".to_owned(),
            Page::Projects => "/projects".to_owned(),
            Page::Blog => "/blog".to_owned(),
            Page::BlogPost { slug } => format!("/blog/{}", urlencoding::encode(slug)),
            Page::Contact => "/contact".to_owned(),
            Page::NotFound { path } => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Blog => "Blog",
            Page::BlogPost { .. } => "Blog",
            Page::Contact => "Contact",
            Page::NotFound { .. } => "404 - Page Not Found",
        }
    }

    // http-equivalent status of the page
    pub fn status(&self) -> u16 {
        match self {
            Page::NotFound { .. } => 404,
            _ => 200,
        }
    }

    pub fn is_found(&self) -> bool {
        self.status() == 200
    }

    // the fixed pages, for sitemaps and link lists
    pub fn static_pages() -> Vec<Page> {
        ROUTES
            .iter()
            .filter(|entry| entry.is_static())
            .map(|entry| (entry.page)(String::new()))
            .collect()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(resolve("/"), Page::Home);
        assert_eq!(resolve(""), Page::Home);
        assert_eq!(resolve("/about"), Page::About);
        assert_eq!(resolve("/projects"), Page::Projects);
        assert_eq!(resolve("/blog"), Page::Blog);
        assert_eq!(resolve("/contact"), Page::Contact);
    }

    #[test]
    fn test_trailing_slash_query_and_fragment() {
        assert_eq!(resolve("/about/"), Page::About);
        assert_eq!(resolve("/projects?q=react"), Page::Projects);
        assert_eq!(resolve("/contact#form"), Page::Contact);
        assert_eq!(resolve("/?utm=x"), Page::Home);
    }

    #[test]
    fn test_doubled_slashes_are_not_found() {
        for path in ["//about//", "/blog//x", "//", "/about//", "/blog/x//"] {
            let page = resolve(path);
            assert!(matches!(page, Page::NotFound { .. }), "{path}");
            assert_eq!(resolve_with(path, |_| true).status(), 404, "{path}");
        }

        assert_eq!(resolve("/blog/x/"), Page::BlogPost { slug: "x".to_owned() });
        assert_eq!(resolve("/blog/"), Page::Blog);
    }

    #[test]
    fn test_blog_slug_is_extracted_and_decoded() {
        assert_eq!(
            resolve("/blog/modern-css-techniques-2024"),
            Page::BlogPost {
                slug: "modern-css-techniques-2024".to_owned()
            }
        );
        assert_eq!(
            resolve("/blog/a%20b"),
            Page::BlogPost {
                slug: "a b".to_owned()
            }
        );
    }

    #[test]
    fn test_unmatched_paths_are_not_found() {
        for path in ["/nope", "/blog/a/b", "/about/me", "/projects/1", "//x"] {
            let page = resolve(path);
            assert!(matches!(page, Page::NotFound { .. }), "{path}");
            assert_eq!(page.status(), 404);
        }
    }

    #[test]
    fn test_unknown_slug_with_lookup_is_not_found() {
        let known = |slug: &str| slug == "real-post";

        assert_eq!(
            resolve_with("/blog/does-not-exist", known),
            Page::NotFound {
                path: "/blog/does-not-exist".to_owned()
            }
        );
        assert_eq!(
            resolve_with("/blog/real-post", known),
            Page::BlogPost {
                slug: "real-post".to_owned()
            }
        );
        assert_eq!(resolve_with("/about", known), Page::About);
    }

    #[test]
    fn test_resolve_known_uses_published_posts() {
        assert!(resolve_known("/blog/building-scalable-react-applications").is_found());
        assert_eq!(resolve_known("/blog/does-not-exist").status(), 404);
    }

    #[test]
    fn test_path_round_trip() {
        let pages = Page::static_pages()
            .into_iter()
            .chain([Page::BlogPost {
                slug: "a b".to_owned(),
            }]);

        for page in pages {
            assert_eq!(resolve(&page.path()), page);
        }
    }

    #[test]
    fn test_every_nav_item_resolves() {
        for item in nav_items() {
            assert!(resolve(item.path).is_found(), "{}", item.path);
        }
    }

    #[test]
    fn test_static_pages_and_nav_come_from_the_table() {
        let pages = Page::static_pages();
        assert_eq!(pages.len(), 5);

        for (page, item) in pages.iter().zip(nav_items()) {
            assert_eq!(page.path(), item.path);
            assert_eq!(resolve(item.path), *page);
        }

        let names: Vec<&str> = nav_items().iter().map(|item| item.name).collect();
        assert_eq!(names, ["Home", "About", "Projects", "Blog", "Contact"]);
    }
}
