use api::services::inscripciones;
use dioxus::prelude::*;
use store::models::{Inscripcion, InscripcionStatus};
use store::{ModalKind, ToastKind};
use ui::components::{Button, ButtonVariant, FieldError, Spinner};
use ui::{toast, use_api, use_session, use_ui, PaymentModal};

use super::checked;
use crate::Route;

/// The player's enrollments, with "pay" and "cancel" actions.
#[component]
pub fn MyInscriptions() -> Element {
    let session = use_session();
    let api = use_api();
    let mut ui = use_ui();
    let mut list = use_resource(move || async move {
        checked(session, inscripciones::mine(&api()).await)
    });

    use_drop(move || ui.write().close_modal());

    let paying = match ui.read().modal {
        Some(ModalKind::Payment { inscripcion_id }) => Some(inscripcion_id),
        _ => None,
    };

    let cancel = move |id: i64| {
        spawn(async move {
            match checked(session, inscripciones::cancel(&api(), id).await) {
                Ok(()) => {
                    toast(ui, ToastKind::Info, "Inscripción cancelada");
                    list.restart();
                }
                Err(e) => toast(ui, ToastKind::Error, e.user_message()),
            }
        });
    };

    let rows = match &*list.read() {
        None => return rsx! { Spinner {} },
        Some(Err(e)) => return rsx! { FieldError { message: e.user_message() } },
        Some(Ok(rows)) => rows.clone(),
    };

    let paying_row = paying.and_then(|id| rows.iter().find(|r| r.id == id).cloned());

    rsx! {
        h1 { class: "page-title", "Mis inscripciones" }
        if rows.is_empty() {
            p { class: "muted",
                "Todavía no te inscribiste en ningún torneo. "
                Link { to: Route::Tournaments { ciudad: String::new() }, "Ver torneos" }
            }
        }
        table { class: "table",
            tbody {
                for row in rows {
                    InscriptionRow {
                        key: "{row.id}",
                        row: row.clone(),
                        on_pay: move |id: i64| ui.write().open_modal(ModalKind::Payment { inscripcion_id: id }),
                        on_cancel: cancel,
                    }
                }
            }
        }
        if let Some(inscripcion) = paying_row {
            PaymentModal {
                inscripcion: inscripcion,
                on_close: move |_| ui.write().close_modal(),
                on_paid: move |_| list.restart(),
            }
        }
    }
}

#[component]
fn InscriptionRow(row: Inscripcion, on_pay: EventHandler<i64>, on_cancel: EventHandler<i64>) -> Element {
    let id = row.id;
    let payable = matches!(row.estado, InscripcionStatus::PendientePago);
    let cancellable = !matches!(row.estado, InscripcionStatus::Cancelada | InscripcionStatus::Confirmada);

    rsx! {
        tr {
            td {
                Link { to: Route::TournamentDetail { id: row.tournament_id }, "Torneo #{row.tournament_id}" }
            }
            td { "{row.pareja.label()}" }
            td { span { class: "badge", "{row.estado.label()}" } }
            td {
                if let Some(method) = row.metodo_pago {
                    "{method.label()}"
                }
            }
            td {
                if payable {
                    Button { onclick: move |_| on_pay.call(id), "Pagar" }
                }
                if cancellable {
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_cancel.call(id), "Cancelar" }
                }
            }
        }
    }
}
