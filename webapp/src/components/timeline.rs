use dioxus::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::tag::{Tag, TagVariant};
use content::{EntryKind, TimelineEntry};

fn kind_icon(kind: EntryKind) -> Icon {
    match kind {
        EntryKind::Work => Icon::Code,
        EntryKind::Achievement => Icon::Award,
        EntryKind::Education => Icon::Users,
    }
}

fn kind_variant(kind: EntryKind) -> TagVariant {
    match kind {
        EntryKind::Work => TagVariant::Primary,
        EntryKind::Achievement => TagVariant::Pink,
        EntryKind::Education => TagVariant::Green,
    }
}

// career milestones; selecting one expands its highlights, selecting it again
// collapses it
#[component]
pub fn InteractiveTimeline(entries: &'static [TimelineEntry]) -> Element {
    let mut selected = use_signal(|| None::<u32>);

    rsx! {
        ol { class: "timeline",
            for entry in entries.iter() {
                li {
                    key: "{entry.id}",
                    class: if selected() == Some(entry.id) { "timeline-item active" } else { "timeline-item" },
                    onclick: move |_| {
                        let next = if selected() == Some(entry.id) { None } else { Some(entry.id) };
                        selected.set(next);
                    },
                    span { class: "timeline-dot" }
                    div { class: "card card-body",
                        div { class: "card-meta",
                            span { class: "timeline-year", "{entry.year}" }
                            Tag { label: entry.kind.label().to_owned(), variant: kind_variant(entry.kind) }
                        }
                        h3 { class: "card-title",
                            IconView { icon: kind_icon(entry.kind) }
                            " {entry.title}"
                        }
                        p { class: "card-meta", "{entry.organization}" }
                        p { class: "card-text", "{entry.description}" }

                        if selected() == Some(entry.id) && !entry.highlights.is_empty() {
                            ul { class: "timeline-highlights",
                                for highlight in entry.highlights.iter() {
                                    li { key: "{highlight}", "{highlight}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
