use dioxus::prelude::*;

// labelled proficiency bar; the fill animates in from zero on mount
#[component]
pub fn SkillBar(name: String, level: u8) -> Element {
    let level = level.min(100);

    rsx! {
        div { class: "skill-bar",
            div { class: "skill-label",
                span { "{name}" }
                span { "{level}%" }
            }
            div {
                class: "skill-track",
                role: "progressbar",
                "aria-valuenow": "{level}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                div { class: "skill-fill", style: "width: {level}%;" }
            }
        }
    }
}
