use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TagVariant {
    #[default]
    Primary,
    Purple,
    Pink,
    Green,
    Muted,
}

impl TagVariant {
    fn class(self) -> &'static str {
        match self {
            TagVariant::Primary => "tag",
            TagVariant::Purple => "tag tag-purple",
            TagVariant::Pink => "tag tag-pink",
            TagVariant::Green => "tag tag-green",
            TagVariant::Muted => "tag tag-muted",
        }
    }
}

#[component]
pub fn Tag(label: String, #[props(default)] variant: TagVariant) -> Element {
    rsx! {
        span { class: variant.class(), "{label}" }
    }
}

#[component]
pub fn TagList(tags: &'static [&'static str], #[props(default)] overflow: usize) -> Element {
    rsx! {
        div { class: "tag-list",
            for tag in tags.iter() {
                Tag { key: "{tag}", label: tag.to_string() }
            }
            if overflow > 0 {
                Tag { label: format!("+{overflow}"), variant: TagVariant::Muted }
            }
        }
    }
}
