use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Fallback for a rendering error: retry in place or go home.
#[component]
pub fn ErrorFallback(
    #[props(default = "Algo salió mal al mostrar esta página.".to_string())] message: String,
    on_retry: EventHandler<()>,
) -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "error-fallback", role: "alert",
            h2 { "Ups" }
            p { "{message}" }
            div { class: "error-fallback__actions",
                Button { onclick: move |_| on_retry.call(()), "Reintentar" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        on_retry.call(());
                        nav.replace(NavigationTarget::Internal("/".to_string()));
                    },
                    "Ir al inicio"
                }
            }
        }
    }
}
