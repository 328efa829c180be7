use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::components::backgrounds::GeometricBackground;
use crate::components::carousel::TestimonialsCarousel;
use crate::components::icons::{Icon, IconView};
use crate::components::particles::InteractiveParticles;
use crate::components::post::PostCard;
use crate::components::project::{ProjectCard, ProjectModal};
use content::profile::{profile, social_links};
use content::project::featured_projects;
use content::{Project, latest_posts, testimonials};

const FEATURED_ON_HOME: usize = 3;
const POSTS_ON_HOME: usize = 3;

#[component]
pub fn Home() -> Element {
    let me = profile();
    let mut selected = use_signal(|| None::<&'static Project>);

    let featured: Vec<&'static Project> = featured_projects().take(FEATURED_ON_HOME).collect();
    let posts = latest_posts(POSTS_ON_HOME);

    rsx! {
        // hero
        section { class: "hero",
            GeometricBackground {}
            InteractiveParticles {
                div { class: "container hero-content",
                    span { class: "availability", "{me.availability}" }
                    h1 { class: "hero-title",
                        "Hi, I'm "
                        span { class: "gradient-text", "{me.name}" }
                    }
                    p { class: "hero-subtitle", "{me.headline}" }
                    div { class: "hero-actions",
                        Link { to: Route::Projects {}, class: "btn btn-primary btn-lg", "View My Work" }
                        a {
                            class: "btn btn-secondary btn-lg",
                            href: "{me.resume}",
                            download: "",
                            IconView { icon: Icon::Download }
                            " Download CV"
                        }
                    }
                    div { class: "hero-social",
                        for link in social_links().iter() {
                            a {
                                key: "{link.name}",
                                class: "icon-btn",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": "{link.name}",
                                IconView { icon: link.glyph.into() }
                            }
                        }
                    }
                }
            }
        }

        // featured projects
        section { class: "section container",
            div { class: "section-header",
                h2 { class: "section-title", "Featured Projects" }
                p { class: "page-subtitle", "A few things I've built recently." }
            }
            div { class: "grid",
                for project in featured {
                    ProjectCard {
                        key: "{project.id}",
                        project,
                        on_select: move |project| selected.set(Some(project)),
                    }
                }
            }
            div { class: "hero-actions",
                Link { to: Route::Projects {}, class: "btn btn-ghost",
                    "View All Projects "
                    IconView { icon: Icon::ArrowRight }
                }
            }
        }

        // latest posts
        section { class: "section container",
            div { class: "section-header",
                h2 { class: "section-title", "Latest Posts" }
                p { class: "page-subtitle", "Notes on building for the web." }
            }
            div { class: "grid",
                for post in posts {
                    PostCard { key: "{post.id}", post }
                }
            }
            div { class: "hero-actions",
                Link { to: Route::Blog {}, class: "btn btn-ghost",
                    "Read the Blog "
                    IconView { icon: Icon::ArrowRight }
                }
            }
        }

        // testimonials
        section { class: "section container",
            div { class: "section-header",
                h2 { class: "section-title", "What People Say" }
            }
            TestimonialsCarousel { testimonials: testimonials() }
        }

        // call to action
        section { class: "section cta",
            div { class: "container",
                h2 { class: "section-title", "Let's Work Together" }
                p { class: "page-subtitle", "Have a project in mind? I'd love to hear about it." }
                Link { to: Route::Contact {}, class: "btn btn-secondary btn-lg",
                    IconView { icon: Icon::Mail }
                    " Get In Touch"
                }
            }
        }

        if let Some(project) = selected() {
            ProjectModal { project, on_close: move |_| selected.set(None) }
        }
    }
}
