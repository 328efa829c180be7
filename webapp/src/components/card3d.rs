use dioxus::prelude::*;

use common::anim::tilt;

const DEFAULT_INTENSITY: f64 = 0.3;

// card that leans towards the pointer
//
// the bounding box is measured when the pointer enters, so moving the pointer
// only does arithmetic; leaving the card resets it flat
#[component]
pub fn Card3D(
    #[props(default)] class: String,
    #[props(default = DEFAULT_INTENSITY)] intensity: f64,
    children: Element,
) -> Element {
    let mut element = use_signal(|| None::<std::rc::Rc<MountedData>>);
    // origin x, origin y, width, height
    let mut bounds = use_signal(|| (0.0, 0.0, 0.0, 0.0));
    let mut rotation = use_signal(|| None::<(f64, f64)>);

    let transform = match rotation() {
        Some((rx, ry)) => format!(
            "transform: perspective(1000px) rotateX({rx:.2}deg) rotateY({ry:.2}deg) scale(1.05);"
        ),
        None => "transform: perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1);".to_owned(),
    };

    rsx! {
        div {
            class: "card-3d {class}",
            style: "{transform}",
            onmounted: move |evt| element.set(Some(evt.data())),
            onmouseenter: move |_| async move {
                let Some(mounted) = element() else {
                    return;
                };
                if let Ok(rect) = mounted.get_client_rect().await {
                    bounds.set((rect.origin.x, rect.origin.y, rect.size.width, rect.size.height));
                }
            },
            onmousemove: move |evt| {
                let (left, top, width, height) = bounds();
                let point = evt.client_coordinates();
                rotation.set(Some(tilt(point.x - left, point.y - top, width, height, intensity)));
            },
            onmouseleave: move |_| rotation.set(None),
            {children}
        }
    }
}
