use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "not-found",
            h1 { "Página no encontrada" }
            p { class: "muted", "No existe /{path}" }
            Link { to: "/", "Volver al inicio" }
        }
    }
}
