use dioxus::prelude::*;

use crate::shared::{browser, storage::BrowserStore};
use common::theme::{ThemePreference, ThemeState};

pub type Theme = Signal<ThemeState<BrowserStore>>;

// provides the theme to every component below the caller
//
// the dom attribute is kept in sync by a listener, so components that only need
// the colours never have to read the signal at all
pub fn use_theme_provider() -> Theme {
    use_context_provider(|| {
        let mut state = ThemeState::initialize(BrowserStore::open(), &browser::ColorScheme);

        browser::apply_theme(state.get());
        state.subscribe(browser::apply_theme);

        Signal::new(state)
    })
}

pub fn use_theme() -> Theme {
    use_context::<Theme>()
}

pub fn toggle(mut theme: Theme) -> ThemePreference {
    let next = theme.write().toggle();
    tracing::debug!(theme = %next, "theme toggled");
    next
}
