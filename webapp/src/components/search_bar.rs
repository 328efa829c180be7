use dioxus::prelude::*;

use content::{Category, CategoryFilter, FilterState};

#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps<C: Category> {
    filter: Signal<FilterState<C>>,
    placeholder: &'static str,
    #[props(default)]
    status: String,
}

// free-text search plus one chip per category
//
// filtering is live: every keystroke and chip click rewrites the page's filter
// state, and the page recomputes its visible items from it
#[component]
pub fn SearchBar<C: Category>(props: SearchBarProps<C>) -> Element {
    let mut filter = props.filter;
    let placeholder = props.placeholder;
    let status = props.status.clone();

    let current = filter.read().clone();

    rsx! {
        div { class: "search-bar",
            input {
                class: "form-input",
                r#type: "search",
                "aria-label": "Search",
                placeholder: "{placeholder}",
                value: "{current.search_term}",
                oninput: move |evt| filter.write().search_term = evt.value(),
            }

            div { class: "chip-row", role: "group", "aria-label": "Filter by category",
                for option in CategoryFilter::<C>::options() {
                    button {
                        key: "{option}",
                        class: if option == current.category { "chip active" } else { "chip" },
                        "aria-pressed": if option == current.category { "true" } else { "false" },
                        onclick: move |_| filter.write().category = option,
                        "{option}"
                    }
                }

                if current.is_active() {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| filter.write().clear(),
                        "Clear Filters"
                    }
                }
            }

            if !status.is_empty() {
                span { class: "search-status", "{status}" }
            }
        }
    }
}
