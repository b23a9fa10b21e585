use api::services::{categorias, rankings};
use dioxus::prelude::*;
use store::models::{BannerZone, RankingEntry};
use ui::components::{FieldError, Select, Spinner};
use ui::{use_api, use_session, BannerArea};

use super::checked;

#[component]
pub fn Rankings() -> Element {
    let session = use_session();
    let api = use_api();
    let mut categoria = use_signal(|| Option::<i64>::None);

    let categories = use_resource(move || async move { checked(session, categorias::list(&api()).await) });
    let table = use_resource(move || async move {
        match categoria() {
            Some(id) => checked(session, rankings::by_category(&api(), id).await).map(Some),
            None => Ok(None),
        }
    });

    // Default to the first category once the catalogue arrives.
    use_effect(move || {
        if let Some(Ok(list)) = &*categories.read() {
            if categoria.peek().is_none() {
                if let Some(first) = list.first() {
                    categoria.set(Some(first.id));
                }
            }
        }
    });

    let options: Vec<(String, String)> = match &*categories.read() {
        Some(Ok(list)) => list.iter().map(|c| (c.id.to_string(), c.nombre.clone())).collect(),
        _ => Vec::new(),
    };

    rsx! {
        h1 { class: "page-title", "Rankings" }
        Select {
            id: "ranking-category",
            options: options,
            value: categoria().map(|id| id.to_string()).unwrap_or_default(),
            placeholder: "Categoría",
            onchange: move |v: String| categoria.set(v.parse().ok()),
        }
        BannerArea { zone: BannerZone::Rankings }
        {match &*table.read() {
            None => rsx! { Spinner {} },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            Some(Ok(None)) => rsx! {},
            Some(Ok(Some(entries))) => rsx! { RankingTable { entries: entries.clone() } },
        }}
    }
}

#[component]
fn RankingTable(entries: Vec<RankingEntry>) -> Element {
    if entries.is_empty() {
        return rsx! { p { class: "muted", "Todavía no hay puntos en esta categoría." } };
    }
    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "#" }
                    th { "Jugador" }
                    th { "Torneos" }
                    th { "Puntos" }
                }
            }
            tbody {
                for e in entries {
                    tr { key: "{e.jugador.id}",
                        td { "{e.posicion}" }
                        td { "{e.jugador.full_name()}" }
                        td { "{e.torneos_jugados}" }
                        td { strong { "{e.puntos}" } }
                    }
                }
            }
        }
    }
}
