//! Login and registration.

use api::services::auth::{self, Credentials, Registration};
use dioxus::prelude::*;
use store::guard::safe_return_path;
use ui::components::{Button, ButtonVariant, FieldError, Input, Label};
use ui::{sign_in, use_api, use_session, CityAutocomplete};

use crate::Route;

/// Login form. On success goes to `next` when it is an internal path.
#[component]
pub fn Login(next: String) -> Element {
    let session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let destination = safe_return_path(&next);

    // Already signed in: skip the form.
    let signed_in = session.read().user().is_some();
    let target = destination.clone();
    use_effect(use_reactive!(|signed_in| {
        if signed_in {
            nav.replace(NavigationTarget::Internal(target.clone()));
        }
    }));

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let destination = destination.clone();
        spawn(async move {
            error.set(None);
            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };
            if credentials.email.is_empty() || credentials.password.is_empty() {
                error.set(Some("Ingresá tu email y contraseña".to_string()));
                return;
            }
            loading.set(true);
            match auth::login(&api(), &credentials).await {
                Ok(new_session) => {
                    sign_in(session, new_session).await;
                    nav.replace(NavigationTarget::Internal(destination));
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth",
            h1 { class: "page-title", "Ingresá a FairPadel" }
            form { class: "form card", onsubmit: handle_login,
                FieldError { message: error() }
                Label { html_for: "login-email", "Email" }
                Input {
                    id: "login-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Label { html_for: "login-password", "Contraseña" }
                Input {
                    id: "login-password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Ingresando..." } else { "Ingresar" }
                }
            }
            p { class: "muted",
                "¿No tenés cuenta? "
                Link { to: Route::Register {}, "Registrate" }
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let mut nombre = use_signal(String::new);
    let mut apellido = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut documento = use_signal(String::new);
    let mut telefono = use_signal(String::new);
    let mut ciudad = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let registration = Registration {
                nombre: nombre().trim().to_string(),
                apellido: apellido().trim().to_string(),
                email: email().trim().to_string(),
                documento: documento().trim().to_string(),
                telefono: telefono().trim().to_string(),
                ciudad: ciudad().trim().to_string(),
                password: password(),
            };
            if let Some(message) = registration_error(&registration, &confirm_password()) {
                error.set(Some(message.to_string()));
                return;
            }
            loading.set(true);
            match auth::register(&api(), &registration).await {
                Ok(new_session) => {
                    sign_in(session, new_session).await;
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth",
            h1 { class: "page-title", "Crear cuenta" }
            form { class: "form card", onsubmit: handle_register,
                FieldError { message: error() }
                Label { html_for: "reg-nombre", "Nombre" }
                Input { id: "reg-nombre", value: nombre(), oninput: move |evt: FormEvent| nombre.set(evt.value()) }
                Label { html_for: "reg-apellido", "Apellido" }
                Input { id: "reg-apellido", value: apellido(), oninput: move |evt: FormEvent| apellido.set(evt.value()) }
                Label { html_for: "reg-documento", "Cédula de identidad" }
                Input { id: "reg-documento", value: documento(), oninput: move |evt: FormEvent| documento.set(evt.value()) }
                Label { html_for: "reg-email", "Email" }
                Input { id: "reg-email", r#type: "email", value: email(), oninput: move |evt: FormEvent| email.set(evt.value()) }
                Label { html_for: "reg-telefono", "Teléfono" }
                Input { id: "reg-telefono", r#type: "tel", value: telefono(), oninput: move |evt: FormEvent| telefono.set(evt.value()) }
                Label { html_for: "reg-ciudad", "Ciudad" }
                CityAutocomplete { id: "reg-ciudad", value: ciudad(), on_change: move |c: String| ciudad.set(c) }
                Label { html_for: "reg-password", "Contraseña" }
                Input { id: "reg-password", r#type: "password", value: password(), oninput: move |evt: FormEvent| password.set(evt.value()) }
                Label { html_for: "reg-password2", "Repetí la contraseña" }
                Input {
                    id: "reg-password2",
                    r#type: "password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creando cuenta..." } else { "Crear cuenta" }
                }
            }
            p { class: "muted",
                "¿Ya tenés cuenta? "
                Link { to: Route::Login { next: String::new() }, "Ingresá" }
            }
        }
    }
}

/// First problem with the form, checked before any request.
fn registration_error(r: &Registration, confirm_password: &str) -> Option<&'static str> {
    if r.nombre.is_empty() || r.apellido.is_empty() {
        return Some("Nombre y apellido son obligatorios");
    }
    if r.documento.is_empty() {
        return Some("La cédula es obligatoria");
    }
    if r.email.is_empty() || !r.email.contains('@') {
        return Some("Ingresá un email válido");
    }
    if r.password.len() < 8 {
        return Some("La contraseña debe tener al menos 8 caracteres");
    }
    if r.password != confirm_password {
        return Some("Las contraseñas no coinciden");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            nombre: "Ana".into(),
            apellido: "Benítez".into(),
            email: "ana@example.com".into(),
            documento: "4567890".into(),
            telefono: String::new(),
            ciudad: "Luque".into(),
            password: "secreta123".into(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert_eq!(registration_error(&registration(), "secreta123"), None);
    }

    #[test]
    fn mismatched_passwords_are_reported() {
        assert_eq!(
            registration_error(&registration(), "otra"),
            Some("Las contraseñas no coinciden")
        );
    }

    #[test]
    fn short_password_is_reported_before_mismatch() {
        let mut r = registration();
        r.password = "corta".into();
        assert_eq!(
            registration_error(&r, "x"),
            Some("La contraseña debe tener al menos 8 caracteres")
        );
    }
}
