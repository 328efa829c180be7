use dioxus::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::image::OptimizedImage;
use crate::shared::timers::use_interval;
use common::anim::{CAROUSEL_PERIOD, Carousel};
use content::Testimonial;

// rotating client quotes; hovering pauses the rotation
#[component]
pub fn TestimonialsCarousel(testimonials: &'static [Testimonial]) -> Element {
    let mut carousel = use_signal(|| Carousel::new(testimonials.len()));

    use_interval(CAROUSEL_PERIOD, move || {
        if carousel.peek().is_playing() {
            carousel.write().tick();
        }
    });

    let state = carousel();
    let Some(current) = testimonials.get(state.index()) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "carousel",
            onmouseenter: move |_| carousel.write().pause(),
            onmouseleave: move |_| carousel.write().resume(),

            div {
                key: "{state.index()}",
                class: "carousel-slide {state.direction().as_str()}",
                TestimonialSlide { testimonial: current.clone() }
            }

            if state.len() > 1 {
                div { class: "carousel-controls",
                    button {
                        class: "icon-btn",
                        "aria-label": "Previous testimonial",
                        onclick: move |_| carousel.write().previous(),
                        IconView { icon: Icon::ChevronLeft }
                    }
                    div { class: "carousel-dots",
                        for i in 0..state.len() {
                            button {
                                key: "{i}",
                                class: if i == state.index() { "carousel-dot active" } else { "carousel-dot" },
                                "aria-label": "Show testimonial {i + 1}",
                                onclick: move |_| carousel.write().go_to(i),
                            }
                        }
                    }
                    button {
                        class: "icon-btn",
                        "aria-label": "Next testimonial",
                        onclick: move |_| carousel.write().next(),
                        IconView { icon: Icon::ChevronRight }
                    }
                }
            }
        }
    }
}

#[component]
fn TestimonialSlide(testimonial: Testimonial) -> Element {
    let stars = "★".repeat(usize::from(testimonial.rating.min(5)));

    rsx! {
        figure { class: "testimonial glass-card",
            IconView { icon: Icon::Quote, class: "gradient-text".to_owned() }
            blockquote { class: "testimonial-quote", "\u{201c}{testimonial.content}\u{201d}" }
            div { class: "stars", "aria-label": "{testimonial.rating} out of 5", "{stars}" }
            figcaption { class: "testimonial-author",
                if testimonial.image.is_empty() {
                    div { class: "avatar avatar-initials", "{testimonial.initials()}" }
                } else {
                    OptimizedImage {
                        src: testimonial.image.to_owned(),
                        alt: testimonial.name.to_owned(),
                        class: "avatar".to_owned(),
                    }
                }
                div {
                    div { style: "font-weight: 600;", "{testimonial.name}" }
                    div { class: "card-meta", "{testimonial.role}, {testimonial.company}" }
                    div { class: "card-meta", "{testimonial.project}" }
                }
            }
        }
    }
}
