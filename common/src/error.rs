use thiserror::Error;

use crate::route::Page;

// every way a view can fail
//
// none of these are fatal to the application: the failing view is replaced by
// something that explains what happened and links back home
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("{what} could not be found")]
    NotFound { what: String },

    #[error("failed to render page: {0}")]
    Render(String),

    #[error("failed to load asset {src}")]
    Asset { src: String },
}

impl SiteError {
    pub fn not_found(what: impl Into<String>) -> Self {
        SiteError::NotFound { what: what.into() }
    }

    // the error a resolved page stands for, if any
    pub fn for_page(page: &Page) -> Option<Self> {
        match page {
            Page::NotFound { path } => Some(SiteError::not_found(format!("the page at {path}"))),
            _ => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            SiteError::NotFound { .. } => "Page Not Found",
            SiteError::Render(_) => "Something went wrong",
            SiteError::Asset { .. } => "Image unavailable",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            SiteError::NotFound { what } => {
                format!("Sorry, {what} doesn't exist or may have been moved.")
            }
            SiteError::Render(_) => {
                "This page hit an unexpected error. Reloading or heading home usually fixes it."
                    .to_owned()
            }
            SiteError::Asset { .. } => "This image could not be loaded.".to_owned(),
        }
    }

    // where the "take me somewhere safe" link points
    pub fn recovery(&self) -> Page {
        Page::Home
    }

    pub fn status(&self) -> u16 {
        match self {
            SiteError::NotFound { .. } => 404,
            SiteError::Render(_) => 500,
            SiteError::Asset { .. } => 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::resolve;

    #[test]
    fn test_every_error_recovers_to_home() {
        let errors = [
            SiteError::not_found("post"),
            SiteError::Render("boom".to_owned()),
            SiteError::Asset {
                src: "/a.png".to_owned(),
            },
        ];

        for err in errors {
            assert_eq!(err.recovery(), Page::Home);
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_unmatched_route_becomes_not_found_error() {
        let err = SiteError::for_page(&resolve("/nowhere"));

        assert_eq!(err.as_ref().map(SiteError::status), Some(404));
        assert!(err.unwrap().user_message().contains("/nowhere"));

        assert_eq!(SiteError::for_page(&resolve("/about")), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SiteError::Asset {
                src: "/x.webp".to_owned()
            }
            .to_string(),
            "failed to load asset /x.webp"
        );
    }
}
