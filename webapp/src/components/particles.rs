use std::rc::Rc;

use dioxus::prelude::*;

use crate::shared::{browser, timers::use_interval};
use common::anim::{PARTICLE_FRAME, ParticleField};

const CONNECTION_DISTANCE: f64 = 100.0;
const POINTER_RADIUS: f64 = 150.0;

// the accent blue, as an rgba() prefix
const PARTICLE_RGB: &str = "59, 130, 246";

// a field of drifting dots behind the children, linked by faint lines when close
//
// small screens get half the dots, and reduced motion freezes the field in place
#[component]
pub fn InteractiveParticles(
    #[props(default = 50)] count: usize,
    children: Element,
) -> Element {
    let reduced_motion = use_hook(browser::prefers_reduced_motion);
    let count = if browser::is_small_screen() { count / 2 } else { count };

    let mut field = use_signal(|| {
        ParticleField::new(browser::seed(), count, 0.0, 0.0).with_pointer_radius(POINTER_RADIUS)
    });
    let mut element = use_signal(|| None::<Rc<MountedData>>);
    let mut origin = use_signal(|| (0.0, 0.0));

    use_interval(PARTICLE_FRAME, move || {
        if !reduced_motion {
            field.write().step();
        }
    });

    let measure = move || async move {
        let Some(mounted) = element() else {
            return;
        };
        match mounted.get_client_rect().await {
            Ok(rect) => {
                origin.set((rect.origin.x, rect.origin.y));

                let (width, height) = (rect.size.width, rect.size.height);
                let changed = {
                    let current = field.peek();
                    current.width() != width || current.height() != height
                };
                if changed {
                    field.write().resize(width, height);
                }
            }
            Err(err) => tracing::debug!("could not measure particle field: {err:?}"),
        }
    };

    let rgb = PARTICLE_RGB;
    let current = field.read();
    let connections = current.connections(CONNECTION_DISTANCE);
    let dots: Vec<(usize, f64, f64, f64)> = current
        .particles()
        .iter()
        .map(|p| (p.id, p.x, p.y, p.size))
        .collect();
    let pointer = current.pointer();
    drop(current);

    rsx! {
        div {
            style: "position: relative; overflow: hidden;",
            onmounted: move |evt| async move {
                element.set(Some(evt.data()));
                measure().await;
            },
            onmouseenter: move |_| measure(),
            onmousemove: move |evt| {
                let (left, top) = origin();
                let point = evt.client_coordinates();
                field.write().set_pointer(Some((point.x - left, point.y - top)));
            },
            onmouseleave: move |_| field.write().set_pointer(None),

            div { class: "particles", "aria-hidden": "true",
                svg {
                    for (i, link) in connections.iter().enumerate() {
                        line {
                            key: "c{i}",
                            x1: "{link.x1}",
                            y1: "{link.y1}",
                            x2: "{link.x2}",
                            y2: "{link.y2}",
                            stroke: "rgba({rgb}, 0.2)",
                            stroke_width: "1",
                            opacity: "{link.opacity}",
                        }
                    }
                    for (id, x, y, size) in dots {
                        circle {
                            key: "{id}",
                            cx: "{x}",
                            cy: "{y}",
                            r: "{size}",
                            fill: "rgba({rgb}, 0.6)",
                        }
                    }
                    if let Some((x, y)) = pointer {
                        circle {
                            cx: "{x}",
                            cy: "{y}",
                            r: "{POINTER_RADIUS}",
                            fill: "none",
                            stroke: "rgba({rgb}, 0.6)",
                            stroke_width: "1",
                            opacity: "0.1",
                        }
                    }
                }
            }

            div { class: "particles-content", {children} }
        }
    }
}
