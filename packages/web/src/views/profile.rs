//! Own profile: personal data, photo, achievements and category change.

use api::services::users::{self, ProfileUpdate};
use api::services::categorias;
use api::Upload;
use dioxus::prelude::*;
use store::models::User;
use store::ToastKind;
use ui::browser;
use ui::components::{Button, ButtonVariant, FieldError, Input, Label, Select, Spinner};
use ui::{sign_in, toast, use_api, use_config, use_session, use_ui, CityAutocomplete};

use super::checked;

const PHOTO_INPUT_ID: &str = "profile-photo";

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let user = session.read().user().cloned();
    match user {
        Some(user) => rsx! { ProfileEditor { key: "{user.id}", user: user.clone() } },
        None => rsx! { Spinner {} },
    }
}

#[component]
fn ProfileEditor(user: User) -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let max_photo_bytes = use_config().uploads.max_proof_bytes;
    let user_id = user.id;

    let mut form = use_signal(|| ProfileUpdate {
        nombre: user.nombre.clone(),
        apellido: user.apellido.clone(),
        telefono: user.telefono.clone().unwrap_or_default(),
        ciudad: user.ciudad.clone().unwrap_or_default(),
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut uploading = use_signal(|| false);
    let mut new_category = use_signal(String::new);

    let achievements = use_resource(move || async move {
        checked(session, users::achievements(&api(), user_id).await)
    });
    let categories = use_resource(move || async move { checked(session, categorias::list(&api()).await) });

    // Any endpoint returning the fresh user refreshes the cached session.
    let refresh_user = move |updated: User| async move {
        let current = session.peek().session().cloned();
        if let Some(current) = current {
            sign_in(session, current.with_user(updated)).await;
        }
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let update = form();
        if update.nombre.trim().is_empty() || update.apellido.trim().is_empty() {
            error.set(Some("Nombre y apellido son obligatorios".to_string()));
            return;
        }
        error.set(None);
        saving.set(true);
        spawn(async move {
            match checked(session, users::update_profile(&api(), &update).await) {
                Ok(updated) => {
                    refresh_user(updated).await;
                    toast(ui, ToastKind::Success, "Perfil actualizado");
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    let upload_photo = move |_: FormEvent| {
        let Some((file, meta)) = browser::picked_file(PHOTO_INPUT_ID) else {
            return;
        };
        if let Err(e) = meta.check(max_photo_bytes) {
            browser::reset_file_input(PHOTO_INPUT_ID);
            toast(ui, ToastKind::Error, e.to_string());
            return;
        }
        uploading.set(true);
        spawn(async move {
            let result = match browser::file_bytes(&file).await {
                Ok(bytes) => {
                    let upload = Upload { field: "foto", file_name: meta.name, mime: meta.mime, bytes };
                    checked(session, users::upload_photo(&api(), upload).await)
                }
                Err(e) => Err(api::ApiError::InvalidUpload(e)),
            };
            match result {
                Ok(updated) => {
                    refresh_user(updated).await;
                    toast(ui, ToastKind::Success, "Foto enviada, queda pendiente de aprobación");
                }
                Err(e) => toast(ui, ToastKind::Error, e.user_message()),
            }
            browser::reset_file_input(PHOTO_INPUT_ID);
            uploading.set(false);
        });
    };

    let request_category = move |_: MouseEvent| {
        let Ok(categoria_id) = new_category().parse::<i64>() else {
            return;
        };
        spawn(async move {
            match checked(session, categorias::change(&api(), categoria_id).await) {
                Ok(updated) => {
                    refresh_user(updated).await;
                    toast(ui, ToastKind::Success, "Categoría actualizada");
                }
                Err(e) => toast(ui, ToastKind::Error, e.user_message()),
            }
        });
    };

    let f = form();
    let category_options: Vec<(String, String)> = match &*categories.read() {
        Some(Ok(list)) => list.iter().map(|c| (c.id.to_string(), c.nombre.clone())).collect(),
        _ => Vec::new(),
    };

    rsx! {
        h1 { class: "page-title", "Mi perfil" }
        div { class: "profile",
            section { class: "card profile__photo",
                if let Some(url) = user.foto_url.clone() {
                    img { class: "avatar", src: "{url}", alt: "{user.full_name()}" }
                }
                Label { html_for: PHOTO_INPUT_ID, "Cambiar foto" }
                input {
                    id: PHOTO_INPUT_ID,
                    r#type: "file",
                    accept: "image/*",
                    disabled: uploading(),
                    onchange: upload_photo,
                }
                if user.es_premium {
                    span { class: "badge", "Premium" }
                }
            }

            form { class: "form card", onsubmit: save,
                FieldError { message: error() }
                Label { html_for: "p-nombre", "Nombre" }
                Input { id: "p-nombre", value: f.nombre.clone(), oninput: move |evt: FormEvent| form.write().nombre = evt.value() }
                Label { html_for: "p-apellido", "Apellido" }
                Input { id: "p-apellido", value: f.apellido.clone(), oninput: move |evt: FormEvent| form.write().apellido = evt.value() }
                Label { html_for: "p-telefono", "Teléfono" }
                Input { id: "p-telefono", r#type: "tel", value: f.telefono.clone(), oninput: move |evt: FormEvent| form.write().telefono = evt.value() }
                Label { html_for: "p-ciudad", "Ciudad" }
                CityAutocomplete { id: "p-ciudad", value: f.ciudad.clone(), on_change: move |c: String| form.write().ciudad = c }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Guardando..." } else { "Guardar" }
                }
            }

            section { class: "card",
                h2 { "Categoría" }
                p { class: "muted", "Si tu nivel cambió, pedí el pase a otra categoría." }
                Select {
                    id: "p-categoria",
                    options: category_options,
                    value: new_category(),
                    placeholder: "Nueva categoría",
                    onchange: move |v: String| new_category.set(v),
                }
                Button { variant: ButtonVariant::Secondary, disabled: new_category().is_empty(), onclick: request_category, "Solicitar cambio" }
            }

            section { class: "card",
                h2 { "Logros" }
                {match &*achievements.read() {
                    None => rsx! { Spinner {} },
                    Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
                    Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "Todavía no desbloqueaste logros." } },
                    Some(Ok(list)) => rsx! {
                        ul { class: "achievements",
                            for l in list.iter().cloned() {
                                li { key: "{l.id}",
                                    strong { "{l.nombre}" }
                                    span { class: "muted", " {l.descripcion}" }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
