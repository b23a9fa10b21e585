//! Enrollment dialog: category, partner document and payment method.

use api::services::inscripciones;
use dioxus::prelude::*;
use store::inscription::InscriptionForm;
use store::models::{Inscripcion, PaymentMethod, Tournament};

use crate::components::{Button, ButtonVariant, FieldError, Input, Label, ModalOverlay, Select};
use crate::{handle_unauthorized, use_api, use_session};

/// Validates locally before any request; the server's message is shown
/// inline if the enrollment is refused.
#[component]
pub fn InscriptionModal(
    tournament: Tournament,
    on_close: EventHandler<()>,
    on_created: EventHandler<Inscripcion>,
) -> Element {
    let session = use_session();
    let api = use_api();
    let mut form = use_signal(InscriptionForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let categories: Vec<(String, String)> = tournament
        .categorias
        .iter()
        .map(|c| (c.id.to_string(), c.nombre.clone()))
        .collect();
    let selected_category = form().categoria_id.map(|id| id.to_string()).unwrap_or_default();

    let t = tournament.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let own_documento = session.read().user().map(|u| u.documento.clone());
        let request = match form.read().validate(&t, own_documento.as_deref()) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        submitting.set(true);
        spawn(async move {
            match inscripciones::create(&api(), &request).await {
                Ok(created) => on_created.call(created),
                Err(e) => {
                    if !handle_unauthorized(session, &e) {
                        error.set(Some(e.user_message()));
                    }
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            title: format!("Inscribirse en {}", tournament.nombre),
            form {
                class: "modal-body form",
                onsubmit: handle_submit,

                FieldError { message: error() }

                Label { html_for: "inscription-category", "Categoría" }
                Select {
                    id: "inscription-category",
                    options: categories,
                    value: selected_category,
                    placeholder: "Elegí una categoría",
                    onchange: move |value: String| form.write().set_category_from_str(&value),
                }

                Label { html_for: "inscription-partner", "Documento de tu compañero/a" }
                Input {
                    id: "inscription-partner",
                    placeholder: "Cédula de identidad",
                    value: form().documento_companero,
                    oninput: move |evt: FormEvent| form.write().documento_companero = evt.value(),
                }

                fieldset { class: "radio-group",
                    legend { class: "field-label", "Método de pago" }
                    for method in PaymentMethod::ALL {
                        label { key: "{method.key()}", class: "radio",
                            input {
                                r#type: "radio",
                                name: "inscription-method",
                                value: method.key(),
                                checked: form().metodo_pago == method,
                                onchange: move |_| form.write().metodo_pago = method,
                            }
                            "{method.label()}"
                        }
                    }
                }

                if tournament.costo_inscripcion > 0 {
                    p { class: "muted", "Costo por pareja: {format_guaranies(tournament.costo_inscripcion)}" }
                }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Enviando..." } else { "Inscribirme" }
                    }
                }
            }
        }
    }
}

/// `150000` → `"Gs. 150.000"`.
pub fn format_guaranies(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    format!("Gs. {out}")
}

#[cfg(test)]
mod tests {
    use super::format_guaranies;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_guaranies(0), "Gs. 0");
        assert_eq!(format_guaranies(950), "Gs. 950");
        assert_eq!(format_guaranies(150_000), "Gs. 150.000");
        assert_eq!(format_guaranies(1_250_000), "Gs. 1.250.000");
    }
}
