//! Tournament list and detail.

use api::services::{matches, tournaments};
use api::services::tournaments::TournamentFilter;
use dioxus::prelude::*;
use store::models::{BannerZone, Inscripcion, Match, Tournament};
use store::{ModalKind, ToastKind};
use ui::components::{Button, FieldError, Spinner};
use ui::{
    format_guaranies, toast, use_api, use_session, use_ui, BannerArea, CityAutocomplete,
    InscriptionModal, PaymentModal,
};

use super::checked;
use crate::Route;

/// All tournaments, optionally filtered by city (`?ciudad=`).
#[component]
pub fn Tournaments(ciudad: String) -> Element {
    let session = use_session();
    let api = use_api();
    let mut city = use_signal(|| ciudad.clone());

    let list = use_resource(move || async move {
        let filter = TournamentFilter {
            ciudad: Some(city()).filter(|c| !c.trim().is_empty()),
            ..Default::default()
        };
        checked(session, tournaments::list(&api(), &filter).await)
    });

    rsx! {
        h1 { class: "page-title", "Torneos" }
        div { class: "filters",
            CityAutocomplete {
                id: "tournament-city-filter",
                value: city(),
                placeholder: "Filtrar por ciudad",
                on_change: move |c: String| city.set(c),
            }
        }
        {match &*list.read() {
            None => rsx! { Spinner {} },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { class: "muted", "No encontramos torneos." }
            },
            Some(Ok(list)) => rsx! {
                div { class: "grid",
                    for t in list.iter().cloned() {
                        TournamentCard { key: "{t.id}", tournament: t.clone() }
                    }
                }
            },
        }}
    }
}

#[component]
pub(crate) fn TournamentCard(tournament: Tournament) -> Element {
    rsx! {
        Link { class: "card", to: Route::TournamentDetail { id: tournament.id },
            if let Some(flyer) = tournament.flyer_url.clone() {
                img { class: "card__flyer", src: "{flyer}", alt: "{tournament.nombre}" }
            }
            h3 { class: "card__title", "{tournament.nombre}" }
            p { class: "muted", "{tournament.ciudad} · {tournament.fecha_inicio}" }
            span { class: "badge", "{tournament.estado.label()}" }
        }
    }
}

#[component]
pub fn TournamentDetail(id: i64) -> Element {
    let session = use_session();
    let api = use_api();
    let mut ui = use_ui();
    let nav = use_navigator();
    // Inscription just created, waiting for its payment dialog.
    let mut pending_payment = use_signal(|| Option::<Inscripcion>::None);

    let tournament = use_resource(use_reactive!(|id| async move {
        checked(session, tournaments::get(&api(), id).await)
    }));
    let bracket = use_resource(use_reactive!(|id| async move {
        checked(session, matches::by_tournament(&api(), id).await)
    }));

    use_drop(move || ui.write().close_modal());

    let signed_in = session.read().user().is_some();
    let modal = ui.read().modal.clone();

    let loaded = tournament.read();
    let t = match &*loaded {
        None => return rsx! { Spinner {} },
        Some(Err(e)) => return rsx! { FieldError { message: e.user_message() } },
        Some(Ok(t)) => t.clone(),
    };
    drop(loaded);

    let on_enroll = move |_: MouseEvent| {
        if signed_in {
            ui.write().open_modal(ModalKind::Inscription { tournament_id: id });
        } else {
            nav.push(Route::Login {
                next: Route::TournamentDetail { id }.to_string(),
            });
        }
    };

    rsx! {
        article { class: "tournament",
            if let Some(flyer) = t.flyer_url.clone() {
                img { class: "tournament__flyer", src: "{flyer}", alt: "{t.nombre}" }
            }
            h1 { class: "page-title", "{t.nombre}" }
            p { class: "muted", "{t.ciudad} · {t.fecha_inicio} al {t.fecha_fin}" }
            span { class: "badge", "{t.estado.label()}" }
            if !t.descripcion.is_empty() {
                p { "{t.descripcion}" }
            }
            if t.costo_inscripcion > 0 {
                p { "Inscripción: {format_guaranies(t.costo_inscripcion)} por pareja" }
            }

            h2 { "Categorías" }
            ul { class: "categories",
                for c in t.categorias.iter() {
                    li { key: "{c.id}", "{c.nombre} ({c.tipo})" }
                }
            }

            if t.is_open() {
                Button { onclick: on_enroll, "Inscribirme" }
            }
        }

        BannerArea { zone: BannerZone::TournamentDetail, tournament_id: Some(id) }

        h2 { "Cuadro" }
        {match &*bracket.read() {
            None => rsx! { Spinner {} },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { class: "muted", "El sorteo todavía no se realizó." }
            },
            Some(Ok(list)) => rsx! { Bracket { items: list.clone() } },
        }}

        if modal == Some(ModalKind::Inscription { tournament_id: id }) {
            InscriptionModal {
                tournament: t.clone(),
                on_close: move |_| ui.write().close_modal(),
                on_created: move |created: Inscripcion| {
                    toast(ui, ToastKind::Success, "¡Inscripción registrada!");
                    ui.write().open_modal(ModalKind::Payment { inscripcion_id: created.id });
                    pending_payment.set(Some(created));
                },
            }
        }
        if let (Some(ModalKind::Payment { .. }), Some(inscripcion)) = (modal, pending_payment()) {
            PaymentModal {
                inscripcion: inscripcion,
                on_close: move |_| {
                    ui.write().close_modal();
                    pending_payment.set(None);
                },
                on_paid: move |_| {},
            }
        }
    }
}

/// Matches grouped by round, in server order.
#[component]
fn Bracket(items: Vec<Match>) -> Element {
    let mut rounds: Vec<(String, Vec<Match>)> = Vec::new();
    for m in items {
        match rounds.iter().position(|(r, _)| *r == m.ronda) {
            Some(i) => rounds[i].1.push(m),
            None => rounds.push((m.ronda.clone(), vec![m])),
        }
    }

    rsx! {
        div { class: "bracket",
            for (ronda, list) in rounds {
                section { key: "{ronda}", class: "bracket__round",
                    h3 { "{ronda}" }
                    for m in list {
                        MatchRow { key: "{m.id}", m: m.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn MatchRow(m: Match) -> Element {
    let side = |p: &Option<store::models::Pareja>| {
        p.as_ref().map(|p| p.label()).unwrap_or_else(|| "A definir".to_string())
    };
    let score = m
        .sets
        .iter()
        .map(|s| format!("{}-{}", s.pareja1, s.pareja2))
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        div { class: "match",
            span { "{side(&m.pareja1)}" }
            span { class: "match__score", "{score}" }
            span { "{side(&m.pareja2)}" }
        }
    }
}
