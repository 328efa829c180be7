use std::time::Duration;

use dioxus::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::shared::{browser, timers::use_interval};

const POLL: Duration = Duration::from_millis(200);

// how far down the page the button appears
const SHOW_AFTER: f64 = 300.0;

fn is_visible(offset: f64) -> bool {
    offset > SHOW_AFTER
}

// floating button that scrolls back to the top once the page is scrolled down
#[component]
pub fn ScrollToTop() -> Element {
    let mut visible = use_signal(|| false);

    use_interval(POLL, move || {
        let next = is_visible(browser::scroll_offset());
        if next != *visible.peek() {
            visible.set(next);
        }
    });

    rsx! {
        if visible() {
            button {
                class: "scroll-top",
                "aria-label": "Scroll to top",
                onclick: move |_| browser::smooth_scroll_to_top(),
                IconView { icon: Icon::ArrowUp }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_shows_past_the_threshold() {
        assert!(!is_visible(0.0));
        assert!(!is_visible(SHOW_AFTER));
        assert!(is_visible(SHOW_AFTER + 1.0));
    }
}
