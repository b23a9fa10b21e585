use api::services::subscriptions;
use dioxus::prelude::*;
use store::ToastKind;
use ui::components::{Button, ButtonVariant, FieldError, Spinner};
use ui::{browser, format_guaranies, toast, use_api, use_session, use_ui};

use super::checked;

#[component]
pub fn Subscription() -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let mut pending = use_signal(|| Option::<i64>::None);

    let status = use_resource(move || async move { checked(session, subscriptions::status(&api()).await) });
    let plans = use_resource(move || async move { checked(session, subscriptions::plans(&api()).await) });

    let mut subscribe = move |plan_id: i64| {
        pending.set(Some(plan_id));
        // Opened now, while the click still allows popups; pointed at the
        // checkout once the server returns it.
        let tab = browser::PendingTab::open();
        spawn(async move {
            match checked(session, subscriptions::subscribe(&api(), plan_id).await) {
                Ok(checkout) => {
                    tracing::info!(plan_id, "redirecting to checkout");
                    match tab {
                        Some(tab) => tab.navigate(&checkout.checkout_url),
                        None => browser::open_in_new_tab(&checkout.checkout_url),
                    }
                    toast(ui, ToastKind::Info, "Completá el pago en la pestaña que se abrió");
                }
                Err(e) => {
                    if let Some(tab) = tab {
                        tab.close();
                    }
                    toast(ui, ToastKind::Error, e.user_message());
                }
            }
            pending.set(None);
        });
    };

    rsx! {
        h1 { class: "page-title", "FairPadel Premium" }
        {match &*status.read() {
            Some(Ok(s)) if s.activa => rsx! {
                div { class: "card card--highlight",
                    p {
                        "Tu suscripción "
                        strong { {s.plan.as_ref().map(|p| p.nombre.clone()).unwrap_or_default()} }
                        " está activa."
                    }
                    if let Some(until) = s.vence_en.clone() {
                        p { class: "muted", "Vence el {until}" }
                    }
                }
            },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            _ => rsx! {},
        }}
        {match &*plans.read() {
            None => rsx! { Spinner {} },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            Some(Ok(list)) => rsx! {
                div { class: "grid",
                    for plan in list.iter().cloned() {
                        div { key: "{plan.id}", class: "card plan",
                            h2 { "{plan.nombre}" }
                            p { class: "plan__price", "{format_guaranies(plan.precio_mensual)} / mes" }
                            ul {
                                for b in plan.beneficios.iter() {
                                    li { "{b}" }
                                }
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: pending().is_some(),
                                onclick: move |_| subscribe(plan.id),
                                if pending() == Some(plan.id) { "Redirigiendo..." } else { "Suscribirme" }
                            }
                        }
                    }
                }
            },
        }}
    }
}
