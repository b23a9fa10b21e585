use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default = "Cargando...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "spinner", role: "status",
            span { class: "spinner__dot" }
            span { class: "spinner__label", "{label}" }
        }
    }
}
