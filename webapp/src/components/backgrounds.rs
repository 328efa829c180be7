use dioxus::prelude::*;

use crate::shared::browser;
use common::anim::{Density, scatter_shapes};

#[component]
pub fn AnimatedGradientBackground(#[props(default)] class: String) -> Element {
    rsx! {
        div { class: "backdrop gradient-backdrop {class}", "aria-hidden": "true" }
    }
}

// slow floating outlines; the layout is fixed per mount
#[component]
pub fn GeometricBackground(#[props(default)] density: Density) -> Element {
    let shapes = use_hook(move || scatter_shapes(browser::seed(), density));

    let styled = shapes.iter().map(|shape| {
        let class = format!("geo-shape geo-{}", shape.kind.as_str());
        let style = format!(
            "left: {:.1}%; top: {:.1}%; width: {:.0}px; height: {:.0}px; transform: rotate({:.0}deg); opacity: {:.3}; animation-delay: {:.2}s; animation-duration: {:.1}s;",
            shape.x, shape.y, shape.size, shape.size, shape.rotation, shape.opacity, shape.delay, shape.duration,
        );
        (shape.id, class, style)
    });

    rsx! {
        div { class: "backdrop", "aria-hidden": "true",
            for (id, class, style) in styled {
                div { key: "{id}", class: "{class}", style: "{style}" }
            }
        }
    }
}
