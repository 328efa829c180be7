use dioxus::prelude::*;

use crate::components::backgrounds::{AnimatedGradientBackground, GeometricBackground};
use crate::components::glass::GlassCard;
use crate::components::icons::{Icon, IconView};
use crate::components::particles::InteractiveParticles;
use crate::shared::contact::HttpTransport;
use common::contact::{self, ContactForm, ContactStatus, Field, FieldError};
use content::profile::{contact_details, profile, social_links};

fn field_mut(form: &mut ContactForm, field: Field) -> &mut String {
    match field {
        Field::Name => &mut form.name,
        Field::Email => &mut form.email,
        Field::Subject => &mut form.subject,
        Field::Message => &mut form.message,
    }
}

#[component]
fn FormField(
    field: Field,
    value: String,
    #[props(default)] multiline: bool,
    #[props(default = "text")] input_type: &'static str,
    #[props(!optional)] error: Option<String>,
    disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    let id = format!("contact-{}", field.label().to_lowercase());
    let class = if error.is_some() { "form-input invalid" } else { "form-input" };

    rsx! {
        div { class: "form-field",
            label { r#for: "{id}", "{field.label()}" }
            if multiline {
                textarea {
                    id: "{id}",
                    class: "{class}",
                    rows: "6",
                    value: "{value}",
                    disabled,
                    oninput: move |evt| on_input.call(evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    class: "{class}",
                    r#type: input_type,
                    value: "{value}",
                    disabled,
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }
            if let Some(error) = error {
                span { class: "field-error", "{field.label()} {error}" }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut status = use_signal(ContactStatus::default);

    let me = profile();
    let configured = use_hook(|| HttpTransport::new().is_configured());

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();

        if status.peek().is_sending() {
            return;
        }

        // inline errors come from the same validation send() runs
        if let Err(found) = form.peek().validate() {
            errors.set(found);
        } else {
            errors.set(Vec::new());
        }

        status.set(ContactStatus::Sending);
        let mut draft = form.peek().clone();
        let next = contact::send(&HttpTransport::new(), &mut draft).await;
        form.set(draft);
        status.set(next);
    };

    let current = form.read().clone();
    let found = errors.read().clone();
    let sending = status.read().is_sending();
    let error_for = |field| ContactForm::error_for(&found, field).map(str::to_owned);

    rsx! {
        div { style: "position: relative;",
            AnimatedGradientBackground {}
            GeometricBackground {}

            InteractiveParticles { count: 25,
                section { class: "section container",
                    div { class: "page-header",
                        h1 { class: "page-title",
                            "Get In "
                            span { class: "gradient-text", "Touch" }
                        }
                        p { class: "page-subtitle",
                            "Have a project in mind or just want to say hello? I'd love to hear from you."
                        }
                    }

                    div { class: "contact-layout",
                        GlassCard { glow: true,
                            h2 { class: "section-title", "Send me a message" }

                            if !configured {
                                p { class: "form-status failed",
                                    "The message form is offline right now. Please email "
                                    a { href: "mailto:{me.email}", "{me.email}" }
                                    " instead."
                                }
                            }

                            {match status() {
                                ContactStatus::Sent => rsx! {
                                    p { class: "form-status sent", role: "status",
                                        "Message sent successfully! I'll get back to you soon."
                                    }
                                },
                                ContactStatus::Failed(message) => rsx! {
                                    p { class: "form-status failed", role: "alert", "{message}" }
                                },
                                ContactStatus::Idle | ContactStatus::Sending => rsx! {},
                            }}

                            form { class: "contact-form", novalidate: true, onsubmit: submit,
                                div { class: "form-row",
                                    FormField {
                                        field: Field::Name,
                                        value: current.name.clone(),
                                        error: error_for(Field::Name),
                                        disabled: sending,
                                        on_input: move |value| *field_mut(&mut form.write(), Field::Name) = value,
                                    }
                                    FormField {
                                        field: Field::Email,
                                        value: current.email.clone(),
                                        input_type: "email",
                                        error: error_for(Field::Email),
                                        disabled: sending,
                                        on_input: move |value| *field_mut(&mut form.write(), Field::Email) = value,
                                    }
                                }
                                FormField {
                                    field: Field::Subject,
                                    value: current.subject.clone(),
                                    error: error_for(Field::Subject),
                                    disabled: sending,
                                    on_input: move |value| *field_mut(&mut form.write(), Field::Subject) = value,
                                }
                                FormField {
                                    field: Field::Message,
                                    value: current.message.clone(),
                                    multiline: true,
                                    error: error_for(Field::Message),
                                    disabled: sending,
                                    on_input: move |value| *field_mut(&mut form.write(), Field::Message) = value,
                                }

                                button {
                                    class: "btn btn-primary btn-lg",
                                    r#type: "submit",
                                    disabled: sending,
                                    IconView { icon: Icon::Send }
                                    if sending { " Sending..." } else { " Send Message" }
                                }
                            }
                        }

                        div {
                            GlassCard {
                                h2 { class: "section-title", "Contact Information" }
                                ul {
                                    for detail in contact_details().iter() {
                                        li { key: "{detail.label}", class: "contact-detail",
                                            IconView { icon: detail.glyph.into() }
                                            div {
                                                div { class: "card-meta", "{detail.label}" }
                                                if let Some(href) = detail.href {
                                                    a { href: "{href}", "{detail.value}" }
                                                } else {
                                                    span { "{detail.value}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            GlassCard {
                                h2 { class: "section-title", "Follow Me" }
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

                            GlassCard {
                                h2 { class: "section-title", "Availability" }
                                p { class: "card-text", "{me.availability}" }
                                a { class: "btn btn-secondary", href: "mailto:{me.email}",
                                    IconView { icon: Icon::Mail }
                                    " Send direct email"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_mut_targets_matching_field() {
        let mut form = ContactForm::default();

        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Subject, "Hi"),
            (Field::Message, "Hello there"),
        ] {
            *field_mut(&mut form, field) = value.to_owned();
        }

        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.subject, "Hi");
        assert_eq!(form.message, "Hello there");
        assert!(form.validate().is_ok());
    }
}
