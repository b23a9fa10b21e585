//! Payment dialog for one inscription.
//!
//! Drives [`PaymentFlow`]: pick a method, then either confirm (cash, card)
//! or see the organizer's bank accounts and optionally attach a transfer
//! receipt. The flow lives in this component's scope, so closing the
//! dialog drops it and revokes any preview URL.

use api::services::{inscripciones, tournaments};
use api::Upload;
use dioxus::prelude::*;
use store::models::{BankAccount, Inscripcion, PaymentMethod};
use store::payment::{AccountsState, PaymentEffect, PaymentFlow, PaymentStep};
use store::ToastKind;

use crate::browser::{self, BrowserObjectUrls};
use crate::components::{Button, ButtonVariant, FieldError, ModalOverlay, Spinner};
use crate::{handle_unauthorized, toast, use_api, use_config, use_session, use_ui};

const PROOF_INPUT_ID: &str = "payment-proof-input";

#[component]
pub fn PaymentModal(
    inscripcion: Inscripcion,
    on_close: EventHandler<()>,
    on_paid: EventHandler<Inscripcion>,
) -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let max_bytes = use_config().uploads.max_proof_bytes;
    let preselected = inscripcion.metodo_pago;
    let mut flow = use_signal(move || PaymentFlow::new(preselected, BrowserObjectUrls, max_bytes));
    let mut error = use_signal(|| Option::<String>::None);

    let inscripcion_id = inscripcion.id;
    let tournament_id = inscripcion.tournament_id;

    let mut proceed = move |_: MouseEvent| {
        error.set(None);
        let effect = flow.write().proceed();
        match effect {
            Ok(PaymentEffect::FetchAccounts) => {
                spawn(async move {
                    let result = tournaments::bank_accounts(&api(), tournament_id)
                        .await
                        .map_err(|e| e.user_message());
                    flow.write().accounts_loaded(result);
                });
            }
            Ok(PaymentEffect::None) => {}
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let mut back = move |_: MouseEvent| {
        error.set(None);
        browser::reset_file_input(PROOF_INPUT_ID);
        if let Err(e) = flow.write().back() {
            error.set(Some(e.to_string()));
        }
    };

    let on_file = move |_: FormEvent| {
        let Some((file, meta)) = browser::picked_file(PROOF_INPUT_ID) else {
            return;
        };
        let result = flow.write().select_proof(file, meta).map(|_| ());
        match result {
            Ok(()) => error.set(None),
            Err(e) => {
                browser::reset_file_input(PROOF_INPUT_ID);
                error.set(Some(e.to_string()));
            }
        }
    };

    let submit = move |_: MouseEvent| {
        let method = match flow.write().submit() {
            Ok(method) => method,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        spawn(async move {
            match send_payment(&api(), inscripcion_id, method, flow).await {
                Ok(updated) => {
                    flow.write().submit_succeeded();
                    browser::reset_file_input(PROOF_INPUT_ID);
                    tracing::info!(inscripcion_id, %method, "payment method recorded");
                    toast(ui, ToastKind::Success, "Pago registrado");
                    on_paid.call(updated);
                }
                Err(e) => {
                    flow.write().submit_failed();
                    if !handle_unauthorized(session, &e) {
                        error.set(Some(e.user_message()));
                    }
                }
            }
        });
    };

    // Closing mid-request would drop the flow before the response lands.
    let close = move |_: ()| {
        if !flow.peek().is_submitting() {
            on_close.call(());
        }
    };

    let step = flow.read().step().clone();
    let preview = flow
        .read()
        .proof()
        .map(|p| (p.preview_url.clone(), p.meta.name.clone()));

    rsx! {
        ModalOverlay {
            on_close: close,
            title: "Pagar inscripción",
            div { class: "modal-body",
                p { class: "muted", "{inscripcion.pareja.label()}" }
                FieldError { message: error() }

                {match step {
                    PaymentStep::Selecting { choice } => rsx! {
                        div { class: "method-list",
                            for method in PaymentMethod::ALL {
                                button {
                                    key: "{method.key()}",
                                    class: method_class(choice == Some(method)),
                                    onclick: move |_| {
                                        if let Err(e) = flow.write().choose(method) {
                                            error.set(Some(e.to_string()));
                                        }
                                    },
                                    "{method.label()}"
                                }
                            }
                        }
                        div { class: "modal-actions",
                            Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Cancelar" }
                            Button { onclick: move |e| proceed(e), disabled: choice.is_none(), "Continuar" }
                        }
                    },
                    PaymentStep::Confirming { method } => rsx! {
                        p { {confirm_text(method)} }
                        div { class: "modal-actions",
                            Button { variant: ButtonVariant::Ghost, onclick: move |e| back(e), "Volver" }
                            Button { onclick: submit, "Confirmar" }
                        }
                    },
                    PaymentStep::Transfer { accounts } => rsx! {
                        BankAccounts { accounts }
                        div { class: "proof",
                            label { class: "field-label", r#for: PROOF_INPUT_ID, {proof_label(max_bytes)} }
                            input {
                                id: PROOF_INPUT_ID,
                                r#type: "file",
                                accept: "image/*",
                                onchange: on_file,
                            }
                            if let Some((url, name)) = preview {
                                div { class: "proof__preview",
                                    img { src: "{url}", alt: "{name}" }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: move |_| {
                                            flow.write().remove_proof();
                                            browser::reset_file_input(PROOF_INPUT_ID);
                                        },
                                        "Quitar"
                                    }
                                }
                            }
                            p { class: "muted", "Podés enviar el comprobante más tarde desde \"Mis inscripciones\"." }
                        }
                        div { class: "modal-actions",
                            Button { variant: ButtonVariant::Ghost, onclick: move |e| back(e), "Volver" }
                            Button { onclick: submit, "Enviar" }
                        }
                    },
                    PaymentStep::Submitting { .. } => rsx! {
                        Spinner { label: "Registrando pago..." }
                    },
                    PaymentStep::Done { method } => rsx! {
                        p { "Método de pago registrado: {method}" }
                        div { class: "modal-actions",
                            Button { onclick: move |_| on_close.call(()), "Cerrar" }
                        }
                    },
                }}
            }
        }
    }
}

fn method_class(selected: bool) -> &'static str {
    if selected {
        "method method--selected"
    } else {
        "method"
    }
}

fn proof_label(max_bytes: u64) -> String {
    const MB: u64 = 1024 * 1024;
    let limit = if max_bytes >= MB && max_bytes % MB == 0 {
        format!("{} MB", max_bytes / MB)
    } else {
        format!("{} KB", max_bytes.div_ceil(1024))
    };
    format!("Comprobante (opcional, imagen hasta {limit})")
}

fn confirm_text(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Efectivo => "Vas a abonar en efectivo al organizador el día del torneo.",
        PaymentMethod::Bancard => "Vas a abonar con tarjeta a través de Bancard.",
        PaymentMethod::Transferencia => "Vas a abonar por transferencia bancaria.",
    }
}

/// Record the method, then upload the receipt if one is held.
async fn send_payment(
    api: &api::ApiClient,
    inscripcion_id: i64,
    method: PaymentMethod,
    flow: Signal<PaymentFlow<BrowserObjectUrls>>,
) -> Result<Inscripcion, api::ApiError> {
    let updated = inscripciones::set_payment_method(api, inscripcion_id, method).await?;

    let held = flow.peek().proof().map(|p| (p.source.clone(), p.meta.clone()));
    let Some((file, meta)) = held else {
        return Ok(updated);
    };
    let bytes = browser::file_bytes(&file)
        .await
        .map_err(api::ApiError::InvalidUpload)?;
    inscripciones::upload_proof(
        api,
        inscripcion_id,
        Upload {
            field: "comprobante",
            file_name: meta.name,
            mime: meta.mime,
            bytes,
        },
    )
    .await
}

#[component]
fn BankAccounts(accounts: AccountsState) -> Element {
    match accounts {
        AccountsState::Loading => rsx! { Spinner { label: "Cargando cuentas..." } },
        AccountsState::Failed(message) => rsx! {
            div { class: "field-error", "No se pudieron cargar las cuentas: {message}" }
        },
        AccountsState::Loaded(list) if list.is_empty() => rsx! {
            p { class: "muted", "El organizador no cargó cuentas bancarias. Consultale directamente." }
        },
        AccountsState::Loaded(list) => rsx! {
            ul { class: "accounts",
                for account in list {
                    AccountRow { key: "{account.numero_cuenta}", account }
                }
            }
        },
    }
}

#[component]
fn AccountRow(account: BankAccount) -> Element {
    rsx! {
        li { class: "account",
            strong { "{account.banco}" }
            span { "Titular: {account.titular} ({account.documento_titular})" }
            span { "Cuenta: {account.numero_cuenta}" }
            if let Some(alias) = account.alias {
                span { "Alias: {alias}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::proof_label;

    #[test]
    fn proof_label_follows_configured_limit() {
        assert_eq!(proof_label(5 * 1024 * 1024), "Comprobante (opcional, imagen hasta 5 MB)");
        assert_eq!(proof_label(2 * 1024 * 1024), "Comprobante (opcional, imagen hasta 2 MB)");
        assert_eq!(proof_label(1_500_000), "Comprobante (opcional, imagen hasta 1465 KB)");
    }
}
