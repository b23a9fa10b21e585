//! Toasts and app-wide modal state.

use std::time::Duration;

use dioxus::prelude::*;
use store::ui_state::TOAST_TTL_MS;
use store::{Toast, ToastKind, UiState};

pub fn use_ui() -> Signal<UiState> {
    use_context::<Signal<UiState>>()
}

/// Show a toast that disappears after [`TOAST_TTL_MS`].
pub fn toast(mut ui: Signal<UiState>, kind: ToastKind, message: impl Into<String>) {
    ui.write().push_toast(kind, message);
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[component]
pub fn UiProvider(children: Element) -> Element {
    let ui = use_signal(UiState::default);
    use_context_provider(|| ui);

    rsx! {
        {children}
        Toasts {}
    }
}

#[component]
fn Toasts() -> Element {
    let toasts = use_ui().read().toasts.clone();

    rsx! {
        div { class: "toasts", aria_live: "polite",
            for t in toasts {
                ToastItem { key: "{t.id}", toast: t }
            }
        }
    }
}

/// One toast. Its auto-dismiss timer belongs to this scope, so a toast
/// closed by hand takes its timer with it.
#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut ui = use_ui();
    let id = toast.id;

    use_hook(move || {
        spawn(async move {
            sleep(Duration::from_millis(u64::from(TOAST_TTL_MS))).await;
            ui.write().dismiss_toast(id);
        })
    });

    rsx! {
        div {
            class: match toast.kind {
                ToastKind::Success => "toast toast--success",
                ToastKind::Info => "toast toast--info",
                ToastKind::Error => "toast toast--error",
            },
            span { "{toast.message}" }
            button {
                class: "toast__close",
                aria_label: "Cerrar",
                onclick: move |_| ui.write().dismiss_toast(id),
                "×"
            }
        }
    }
}
