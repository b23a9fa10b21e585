//! Admin back-office: photo moderation and the user directory.

use api::services::admin;
use dioxus::prelude::*;
use store::models::{PhotoDecision, Role};
use store::ToastKind;
use ui::components::{Button, ButtonVariant, FieldError, Spinner};
use ui::{toast, use_api, use_session, use_ui};

use super::checked;

#[component]
pub fn Admin() -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();

    let mut photos = use_resource(move || async move { checked(session, admin::pending_photos(&api()).await) });
    let users = use_resource(move || async move { checked(session, admin::users(&api()).await) });

    let review = move |id: i64, decision: PhotoDecision| {
        spawn(async move {
            match checked(session, admin::review_photo(&api(), id, decision).await) {
                Ok(()) => {
                    let msg = match decision {
                        PhotoDecision::Aprobada => "Foto aprobada",
                        PhotoDecision::Rechazada => "Foto rechazada",
                    };
                    toast(ui, ToastKind::Success, msg);
                    photos.restart();
                }
                Err(e) => toast(ui, ToastKind::Error, e.user_message()),
            }
        });
    };

    rsx! {
        h1 { class: "page-title", "Administración" }
        section {
            h2 { "Fotos pendientes" }
            {match &*photos.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
                Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "No hay fotos por revisar." } },
                Some(Ok(list)) => rsx! {
                    div { class: "grid",
                        for p in list.iter().cloned() {
                            div { key: "{p.id}", class: "card photo-review",
                                img { src: "{p.url}", alt: "{p.autor.full_name()}" }
                                p { "{p.autor.full_name()}" }
                                span { class: "muted", "{p.subida_en}" }
                                div { class: "row",
                                    Button { variant: ButtonVariant::Primary, onclick: move |_| review(p.id, PhotoDecision::Aprobada), "Aprobar" }
                                    Button { variant: ButtonVariant::Danger, onclick: move |_| review(p.id, PhotoDecision::Rechazada), "Rechazar" }
                                }
                            }
                        }
                    }
                },
            }}
        }
        section {
            h2 { "Usuarios" }
            {match &*users.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
                Some(Ok(list)) => rsx! {
                    table { class: "table",
                        thead {
                            tr {
                                th { "Nombre" }
                                th { "Email" }
                                th { "Documento" }
                                th { "Roles" }
                                th { "Premium" }
                            }
                        }
                        tbody {
                            for u in list.iter() {
                                tr { key: "{u.id}",
                                    td { "{u.full_name()}" }
                                    td { "{u.email}" }
                                    td { "{u.documento}" }
                                    td { "{role_list(&u.roles)}" }
                                    td { if u.es_premium { "Sí" } else { "No" } }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

fn role_list(roles: &[Role]) -> String {
    roles.iter().map(|r| r.label()).collect::<Vec<_>>().join(", ")
}
