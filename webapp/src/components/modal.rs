use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ModalSize {
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn style(self) -> &'static str {
        match self {
            ModalSize::Medium => "max-width: 600px;",
            ModalSize::Large => "max-width: 860px;",
        }
    }
}

#[component]
pub fn Modal(
    title: String,
    #[props(default)] size: ModalSize,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let width = size.style();

    rsx! {
        div {
            class: "modal-overlay",
            // clicking the overlay closes the modal
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal-content",
                style: "{width}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "btn-close",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal-body", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_map_to_distinct_widths() {
        assert_eq!(ModalSize::default(), ModalSize::Medium);
        assert_ne!(ModalSize::Medium.style(), ModalSize::Large.style());
    }
}
