use dioxus::prelude::*;

/// Full-screen overlay centering its children in a card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] title: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                if !title.is_empty() {
                    div { class: "modal-header",
                        h2 { class: "modal-title", "{title}" }
                        button {
                            class: "modal-close",
                            aria_label: "Cerrar",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                {children}
            }
        }
    }
}
