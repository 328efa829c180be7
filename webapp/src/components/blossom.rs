use dioxus::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::shared::{browser, timers::use_interval};
use common::anim::{PETAL_SPAWN_PERIOD, Petal, PetalColor, PetalField};

const FALLBACK_WIDTH: f64 = 1200.0;

// three blossoms per twig
#[rustfmt::skip]
const CLUSTERS: [(u32, u32, f32); 15] = [
    (140, 95, 4.0), (145, 98, 3.0), (150, 92, 3.5),
    (340, 85, 4.0), (345, 88, 3.0), (350, 82, 3.5),
    (560, 72, 4.0), (565, 75, 3.0), (570, 69, 3.5),
    (780, 78, 4.0), (785, 81, 3.0), (790, 75, 3.5),
    (1010, 80, 4.0), (1015, 83, 3.0), (1020, 77, 3.5),
];

// branches across the top of the page and petals drifting down over it
//
// petals are removed when their fall animation ends; the field also trims
// itself on every spawn, so a tab left in the background cannot pile them up
#[component]
pub fn CherryBlossomBackground() -> Element {
    let mut field = use_signal(|| {
        PetalField::new(
            browser::seed(),
            browser::viewport_width().unwrap_or(FALLBACK_WIDTH),
            browser::prefers_reduced_motion(),
        )
    });

    use_interval(PETAL_SPAWN_PERIOD, move || {
        if !field.peek().is_enabled() {
            return;
        }

        let mut field = field.write();
        if let Some(width) = browser::viewport_width() {
            field.set_width(width);
        }
        field.spawn();
    });

    let enabled = field.read().is_enabled();
    let petals: Vec<Petal> = field.read().petals().to_vec();

    rsx! {
        div { class: "petals", "aria-hidden": "true",
            Branches {}
            for petal in petals {
                FallingPetal {
                    key: "{petal.id}",
                    petal: petal.clone(),
                    on_landed: move |id| {
                        field.write().expire(id);
                    },
                }
            }
        }

        button {
            class: "icon-btn petal-toggle",
            title: if enabled { "Stop falling petals" } else { "Start falling petals" },
            "aria-pressed": "{enabled}",
            onclick: move |_| {
                let next = !field.peek().is_enabled();
                field.write().set_enabled(next);
                tracing::debug!(enabled = next, "petal animation toggled");
            },
            IconView { icon: Icon::Flower }
        }
    }
}

#[component]
fn FallingPetal(petal: Petal, on_landed: EventHandler<u64>) -> Element {
    let [_, sway_1, sway_2, sway_3, sway_4] = petal.sway();
    let class = match petal.color {
        PetalColor::Pink => "petal petal-pink",
        PetalColor::White => "petal petal-white",
    };
    let style = format!(
        "left: {:.0}px; width: {:.1}px; height: {:.1}px; opacity: {:.2}; animation-duration: {:.2}s; animation-delay: {:.2}s; --rotation: {:.0}deg; --sway-1: {sway_1:.0}px; --sway-2: {sway_2:.0}px; --sway-3: {sway_3:.0}px; --sway-4: {sway_4:.0}px;",
        petal.start_x, petal.size, petal.size, petal.opacity, petal.duration, petal.delay, petal.rotation,
    );
    let id = petal.id;

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onanimationend: move |_| on_landed.call(id),
            svg { view_box: "0 0 20 20", width: "100%", height: "100%",
                path {
                    d: "M10 1 C14 5 16 10 10 19 C4 10 6 5 10 1 Z",
                    fill: "currentColor",
                }
            }
        }
    }
}

#[component]
fn Branches() -> Element {
    rsx! {
        svg {
            style: "position: absolute; top: 0; left: 0; width: 100%; height: 160px; color: #78350F; opacity: 0.8;",
            view_box: "0 0 1200 240",
            preserve_aspect_ratio: "xMidYMin slice",
            g { stroke: "currentColor", fill: "none",
                path { d: "M0,80 Q150,60 300,70 Q450,50 600,60 Q750,45 900,55 Q1050,65 1200,50", stroke_width: "12" }
                path { d: "M200,75 Q250,100 350,120 Q400,130 450,140", stroke_width: "8" }
                path { d: "M600,65 Q650,85 750,100 Q800,110 850,125", stroke_width: "8" }
                path { d: "M100,85 Q130,110 170,130", stroke_width: "5" }
                path { d: "M500,62 Q540,82 580,102", stroke_width: "5" }
                path { d: "M950,60 Q990,80 1030,100", stroke_width: "5" }
            }
            g { fill: "#FBCFE8",
                for (cx, cy, r) in CLUSTERS {
                    circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
                }
            }
            g { fill: "#FFFFFF",
                for (cx, cy) in [(165, 100), (365, 90), (585, 77), (805, 83), (1035, 85)] {
                    circle { cx: "{cx}", cy: "{cy}", r: "3" }
                }
            }
        }
    }
}
