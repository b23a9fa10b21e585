use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "field-label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type: "{r#type}",
            id: "{id}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// `<select>` over `(value, label)` pairs with an empty placeholder option.
#[component]
pub fn Select(
    #[props(default)] id: String,
    options: Vec<(String, String)>,
    #[props(default)] value: String,
    #[props(default = "Seleccioná una opción".to_string())] placeholder: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "input",
            id: "{id}",
            value: "{value}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            option { value: "", "{placeholder}" }
            for (v, label) in options {
                option { key: "{v}", value: "{v}", selected: v == value, "{label}" }
            }
        }
    }
}

/// Inline validation or server error.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "field-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}
