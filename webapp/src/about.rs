use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::components::blossom::CherryBlossomBackground;
use crate::components::glass::GlassCard;
use crate::components::icons::{Icon, IconView};
use crate::components::image::OptimizedImage;
use crate::components::skill::SkillBar;
use crate::components::timeline::InteractiveTimeline;
use content::profile::{fun_facts, profile, skill_groups, stats};
use content::timeline;

#[component]
pub fn About() -> Element {
    let me = profile();

    rsx! {
        CherryBlossomBackground {}

        section { class: "section container about-intro",
            div {
                h1 { class: "page-title",
                    "About "
                    span { class: "gradient-text", "Me" }
                }
                div { class: "bio",
                    for (i, paragraph) in me.bio.iter().enumerate() {
                        p { key: "{i}", class: "card-text", "{paragraph}" }
                    }
                }
                p { class: "card-meta",
                    IconView { icon: Icon::MapPin }
                    " {me.location}"
                }
                div { class: "hero-actions",
                    a { class: "btn btn-primary", href: "{me.resume}", download: "",
                        IconView { icon: Icon::Download }
                        " Download Resume"
                    }
                    Link { to: Route::Contact {}, class: "btn btn-secondary", "Get In Touch" }
                }
            }
            div { class: "about-photo",
                OptimizedImage { src: me.avatar.to_owned(), alt: me.name.to_owned() }
            }
        }

        section { class: "section container",
            div { class: "stats-grid",
                for stat in stats().iter() {
                    GlassCard { key: "{stat.label}", class: "stat-card".to_owned(),
                        IconView { icon: stat.glyph.into() }
                        div { class: "stat-value", "{stat.value}" }
                        div { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }

        section { class: "section container",
            div { class: "section-header",
                h2 { class: "section-title", "Skills & Expertise" }
            }
            div { class: "grid",
                for group in skill_groups().iter() {
                    div { key: "{group.category}", class: "card card-body skill-group",
                        h3 { class: "card-title", "{group.category}" }
                        for skill in group.skills.iter() {
                            SkillBar { key: "{skill.name}", name: skill.name.to_owned(), level: skill.level }
                        }
                    }
                }
            }
        }

        section { class: "section container",
            div { class: "section-header",
                h2 { class: "section-title", "My Journey" }
                p { class: "page-subtitle", "Select a milestone to see the highlights." }
            }
            InteractiveTimeline { entries: timeline() }
        }

        section { class: "section container",
            div { class: "section-header",
                h2 { class: "section-title", "Fun Facts" }
            }
            ul { class: "fun-facts grid grid-2",
                for fact in fun_facts().iter() {
                    li { key: "{fact}", class: "glass-card", "{fact}" }
                }
            }
        }
    }
}
