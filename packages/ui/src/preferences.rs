//! Per-type notification delivery toggles.

use api::services::notifications;
use dioxus::prelude::*;
use store::preferences::{Channel, PreferenceSet};
use store::ToastKind;

use crate::components::{FieldError, Spinner};
use crate::icons::FaLock;
use crate::{handle_unauthorized, toast, use_api, use_session, use_ui, Icon};

/// Optimistic toggles: the row flips immediately and only the toggled
/// field is rolled back if the server refuses. SMS is premium-only.
#[component]
pub fn NotificationPreferences() -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let mut prefs = use_signal(|| Option::<PreferenceSet>::None);
    let mut load_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match notifications::preferences(&api()).await {
            Ok(rows) => prefs.set(Some(PreferenceSet::new(rows))),
            Err(e) => {
                if !handle_unauthorized(session, &e) {
                    load_error.set(Some(e.user_message()));
                }
            }
        }
    });

    let premium = session.read().user().map(|u| u.es_premium).unwrap_or(false);

    let mut toggle = move |tipo: String, channel: Channel| {
        let cmd = {
            let mut guard = prefs.write();
            let Some(set) = guard.as_mut() else {
                return;
            };
            match set.toggle(&tipo, channel, premium) {
                Ok(cmd) => cmd,
                Err(e) => {
                    toast(ui, ToastKind::Info, e.to_string());
                    return;
                }
            }
        };
        spawn(async move {
            if let Err(e) = notifications::update_preference(&api(), &cmd).await {
                tracing::warn!(tipo = %cmd.tipo, error = %e, "preference update failed, reverting");
                if let Some(set) = prefs.write().as_mut() {
                    set.revert(&cmd);
                }
                if !handle_unauthorized(session, &e) {
                    toast(ui, ToastKind::Error, e.user_message());
                }
            }
        });
    };

    let Some(set) = prefs() else {
        return rsx! {
            FieldError { message: load_error() }
            if load_error().is_none() {
                Spinner {}
            }
        };
    };

    rsx! {
        table { class: "prefs",
            thead {
                tr {
                    th { "Notificación" }
                    th { "{Channel::Email.label()}" }
                    th { "{Channel::Sms.label()}" }
                }
            }
            tbody {
                for row in set.rows().iter().cloned() {
                    tr { key: "{row.tipo}",
                        td {
                            div { "{row.descripcion}" }
                        }
                        td {
                            input {
                                r#type: "checkbox",
                                checked: row.email,
                                onchange: {
                                    let tipo = row.tipo.clone();
                                    move |_| toggle(tipo.clone(), Channel::Email)
                                },
                            }
                        }
                        SmsCell {
                            premium,
                            checked: row.sms,
                            on_toggle: {
                                let tipo = row.tipo.clone();
                                move |_| toggle(tipo.clone(), Channel::Sms)
                            },
                        }
                    }
                }
            }
        }
        if !premium {
            p { class: "muted",
                Link { to: "/premium", "Activá FairPadel Premium" }
                " para recibir notificaciones por SMS."
            }
        }
    }
}

/// Non-premium users get a lock in place of the SMS control.
#[component]
fn SmsCell(premium: bool, checked: bool, on_toggle: EventHandler<()>) -> Element {
    if !premium {
        return rsx! {
            td {
                span { class: "premium-lock", title: "Disponible con FairPadel Premium",
                    Icon { icon: FaLock, width: 14, height: 14 }
                }
            }
        };
    }
    rsx! {
        td {
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| on_toggle.call(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_core::VirtualDom;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn locked_ticked_row() -> Element {
        rsx! {
            SmsCell { premium: false, checked: true, on_toggle: |_| {} }
        }
    }

    fn premium_row() -> Element {
        rsx! {
            SmsCell { premium: true, checked: true, on_toggle: |_| {} }
        }
    }

    #[test]
    fn non_premium_sms_cell_has_no_control() {
        let html = render(locked_ticked_row);
        assert!(html.contains("premium-lock"), "{html}");
        assert!(html.contains("<svg"), "{html}");
        assert!(!html.contains("checkbox"), "{html}");
        assert!(!html.contains("<input"), "{html}");
    }

    #[test]
    fn premium_sms_cell_is_a_checkbox() {
        let html = render(premium_row);
        assert!(html.contains("checkbox"), "{html}");
        assert!(!html.contains("premium-lock"), "{html}");
    }
}
