use constcat::concat;

mod animations;
mod components;
mod pages;
mod variables;

pub use animations::ANIMATIONS;
pub use components::BASE_COMPONENTS;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// everything the site needs, in cascade order
pub const SITE_STYLES: &str = concat!(
    CSS_VARIABLES,
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html { scroll-behavior: smooth; }

body {
  font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal), color var(--transition-normal);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

img { max-width: 100%; }
"#,
    ANIMATIONS,
    BASE_COMPONENTS,
    PAGE_STYLES,
);
