use api::services::notifications;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FieldError, Spinner};
use ui::{use_api, use_session, NotificationPreferences};

use super::checked;

#[component]
pub fn Notifications() -> Element {
    let session = use_session();
    let api = use_api();
    let mut inbox = use_resource(move || async move { checked(session, notifications::list(&api()).await) });

    let mark_read = move |id: i64| {
        spawn(async move {
            if checked(session, notifications::mark_read(&api(), id).await).is_ok() {
                inbox.restart();
            }
        });
    };

    rsx! {
        h1 { class: "page-title", "Notificaciones" }
        {match &*inbox.read() {
            None => rsx! { Spinner {} },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No tenés notificaciones." } },
            Some(Ok(list)) => rsx! {
                ul { class: "notifications",
                    for n in list.iter().cloned() {
                        li { key: "{n.id}", class: notification_class(n.leida),
                            p { "{n.mensaje}" }
                            span { class: "muted", "{n.creada_en}" }
                            if !n.leida {
                                Button { variant: ButtonVariant::Ghost, onclick: move |_| mark_read(n.id), "Marcar como leída" }
                            }
                        }
                    }
                }
            },
        }}
        h2 { "Preferencias" }
        p { class: "muted", "Elegí cómo querés recibir cada aviso." }
        NotificationPreferences {}
    }
}

fn notification_class(read: bool) -> &'static str {
    if read {
        "notification"
    } else {
        "notification notification--unread"
    }
}
