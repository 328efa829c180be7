use std::time::Duration;

use dioxus::prelude::*;

use crate::shared::{browser, timers::use_interval};

const POLL: Duration = Duration::from_millis(100);

// thin bar across the top of the viewport showing how far the page is scrolled
//
// polled rather than driven by a window scroll listener, so nothing outlives
// the component
#[component]
pub fn ScrollProgress() -> Element {
    let mut progress = use_signal(|| 0.0_f64);

    use_interval(POLL, move || {
        let next = browser::scroll_progress();
        if (next - *progress.peek()).abs() > f64::EPSILON {
            progress.set(next);
        }
    });

    let style = format!("width: {:.2}%;", progress() * 100.0);

    rsx! {
        div {
            class: "scroll-progress",
            style: "{style}",
            role: "presentation",
        }
    }
}
