//! City input with a suggestion dropdown over Paraguayan localities.

use dioxus::prelude::*;
use store::cities::{Autocomplete, NavKey, NavOutcome};

use crate::use_config;

/// Free-text city field. `on_change` fires on every keystroke and on
/// selection, so the parent always holds the visible text.
#[component]
pub fn CityAutocomplete(
    id: String,
    value: String,
    #[props(default = "Ciudad".to_string())] placeholder: String,
    on_change: EventHandler<String>,
) -> Element {
    let mut state = use_signal(|| Autocomplete {
        query: value.clone(),
        ..Default::default()
    });

    // Follow the parent when it replaces the text (e.g. profile loaded).
    use_effect(use_reactive!(|value| {
        if state.peek().query != value {
            state.write().query = value;
        }
    }));

    let limit = use_config().autocomplete.max_suggestions;

    let onkeydown = move |evt: KeyboardEvent| {
        let key = match evt.key() {
            Key::ArrowDown => NavKey::Down,
            Key::ArrowUp => NavKey::Up,
            Key::Enter => NavKey::Enter,
            Key::Escape => NavKey::Escape,
            _ => return,
        };
        let outcome = state.write().key(key);
        match outcome {
            NavOutcome::Selected(city) => {
                evt.prevent_default();
                on_change.call(city);
            }
            NavOutcome::Moved => evt.prevent_default(),
            NavOutcome::Dismissed | NavOutcome::Ignored => {}
        }
    };

    let current = state.read().clone();
    let list_id = format!("{id}-options");

    rsx! {
        div { class: "autocomplete",
            if current.open {
                // Transparent backdrop: clicking anywhere outside dismisses.
                div { class: "autocomplete__backdrop", onclick: move |_| state.write().dismiss() }
            }
            input {
                class: "input",
                id: "{id}",
                r#type: "text",
                autocomplete: "off",
                role: "combobox",
                aria_expanded: current.open,
                aria_controls: "{list_id}",
                placeholder: "{placeholder}",
                value: "{current.query}",
                oninput: move |evt: FormEvent| {
                    let text = evt.value();
                    let mut ac = state.write();
                    ac.set_query(&text);
                    ac.suggestions.truncate(limit);
                    drop(ac);
                    on_change.call(text);
                },
                onkeydown: onkeydown,
            }
            if current.open {
                ul { class: "autocomplete__list", id: "{list_id}", role: "listbox",
                    for (i, city) in current.suggestions.iter().enumerate() {
                        li {
                            key: "{city}",
                            role: "option",
                            class: item_class(current.highlighted == Some(i)),
                            aria_selected: current.highlighted == Some(i),
                            onclick: move |_| {
                                let chosen = state.write().select(i);
                                if let Some(city) = chosen {
                                    on_change.call(city);
                                }
                            },
                            "{city}"
                        }
                    }
                }
            }
        }
    }
}

fn item_class(active: bool) -> &'static str {
    if active {
        "autocomplete__item autocomplete__item--active"
    } else {
        "autocomplete__item"
    }
}
