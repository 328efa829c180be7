use dioxus::prelude::*;

// frosted panel; glow adds a soft coloured halo behind it
#[component]
pub fn GlassCard(
    #[props(default)] class: String,
    #[props(default)] glow: bool,
    children: Element,
) -> Element {
    let style = if glow {
        "box-shadow: 0 0 40px rgba(59, 130, 246, 0.25), var(--shadow-lg);"
    } else {
        ""
    };

    rsx! {
        div { class: "glass-card {class}", style: "{style}", {children} }
    }
}
