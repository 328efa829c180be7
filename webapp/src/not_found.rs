use dioxus::prelude::*;

use crate::components::error::NotFoundView;
use common::error::SiteError;
use common::route::Page;

pub(crate) fn unmatched_page(segments: &[String]) -> Page {
    Page::NotFound {
        path: format!("/{}", segments.join("/")),
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let page = unmatched_page(&segments);

    // once per visited path, not once per render
    use_effect(use_reactive((&page,), |(page,)| {
        tracing::info!(path = %page, "unmatched route");
    }));

    let error = SiteError::for_page(&page).unwrap_or_else(|| SiteError::not_found("this page"));

    rsx! {
        NotFoundView { error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_segments_become_a_404_page() {
        let page = unmatched_page(&["old".to_owned(), "link".to_owned()]);

        assert_eq!(page, Page::NotFound { path: "/old/link".to_owned() });
        assert_eq!(page.status(), 404);
        assert!(SiteError::for_page(&page).is_some());
    }
}
