use api::services::circuitos;
use dioxus::prelude::*;
use store::models::CircuitoStanding;
use ui::components::{FieldError, Select, Spinner};
use ui::{use_api, use_session};

use super::checked;
use super::tournaments::TournamentCard;
use crate::Route;

#[component]
pub fn Circuitos() -> Element {
    let session = use_session();
    let api = use_api();
    let list = use_resource(move || async move { checked(session, circuitos::list(&api()).await) });

    rsx! {
        h1 { class: "page-title", "Circuitos" }
        {match &*list.read() {
            None => rsx! { Spinner {} },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            Some(Ok(list)) => rsx! {
                div { class: "grid",
                    for c in list.iter().cloned() {
                        Link { key: "{c.id}", class: "card", to: Route::CircuitoDetail { id: c.id },
                            h3 { class: "card__title", "{c.nombre}" }
                            p { class: "muted", "{c.torneos.len()} torneos" }
                        }
                    }
                }
            },
        }}
    }
}

/// Circuit tournaments plus standings for one of their categories.
#[component]
pub fn CircuitoDetail(id: i64) -> Element {
    let session = use_session();
    let api = use_api();
    let mut categoria = use_signal(|| Option::<i64>::None);

    let circuito = use_resource(use_reactive!(|id| async move {
        checked(session, circuitos::get(&api(), id).await)
    }));
    let standings = use_resource(use_reactive!(|id| async move {
        match categoria() {
            Some(cat) => checked(session, circuitos::standings(&api(), id, cat).await).map(Some),
            None => Ok(None),
        }
    }));

    let c = match &*circuito.read() {
        None => return rsx! { Spinner {} },
        Some(Err(e)) => return rsx! { FieldError { message: e.user_message() } },
        Some(Ok(c)) => c.clone(),
    };

    // Categories offered by any tournament of the circuit.
    let mut options: Vec<(String, String)> = Vec::new();
    for cat in c.torneos.iter().flat_map(|t| t.categorias.iter()) {
        let key = cat.id.to_string();
        if !options.iter().any(|(k, _)| *k == key) {
            options.push((key, cat.nombre.clone()));
        }
    }

    rsx! {
        h1 { class: "page-title", "{c.nombre}" }
        if !c.descripcion.is_empty() {
            p { "{c.descripcion}" }
        }
        h2 { "Torneos" }
        div { class: "grid",
            for t in c.torneos.iter().cloned() {
                TournamentCard { key: "{t.id}", tournament: t.clone() }
            }
        }
        h2 { "Clasificación" }
        Select {
            id: "circuit-category",
            options: options,
            value: categoria().map(|id| id.to_string()).unwrap_or_default(),
            placeholder: "Elegí una categoría",
            onchange: move |v: String| categoria.set(v.parse().ok()),
        }
        {match &*standings.read() {
            None => rsx! { Spinner {} },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            Some(Ok(None)) => rsx! {},
            Some(Ok(Some(rows))) => rsx! { Standings { rows: rows.clone() } },
        }}
    }
}

#[component]
fn Standings(rows: Vec<CircuitoStanding>) -> Element {
    rsx! {
        table { class: "table",
            tbody {
                for row in rows {
                    tr { key: "{row.pareja.id}",
                        td { "{row.posicion}" }
                        td { "{row.pareja.label()}" }
                        td { strong { "{row.puntos}" } }
                    }
                }
            }
        }
    }
}
