//! Organizer area: own tournaments, creation and the management dashboard.

use api::services::{categorias, circuitos, inscripciones, matches, tournaments};
use api::Upload;
use dioxus::prelude::*;
use store::models::{
    Inscripcion, InscripcionStatus, Match, MatchResult, MatchStatus, NewTournament, SetScore,
    Tournament,
};
use store::ToastKind;
use ui::browser;
use ui::components::{Button, ButtonVariant, FieldError, Input, Label, Select, Spinner};
use ui::{toast, use_api, use_config, use_session, use_ui, CityAutocomplete};

use super::checked;
use super::tournaments::MatchRow;
use crate::Route;

const FLYER_INPUT_ID: &str = "tournament-flyer";

#[component]
pub fn Organizer() -> Element {
    let session = use_session();
    let api = use_api();
    let mine = use_resource(move || async move { checked(session, tournaments::mine(&api()).await) });

    rsx! {
        div { class: "page-header",
            h1 { class: "page-title", "Mis torneos" }
            Link { class: "btn btn--primary", to: Route::CreateTournament {}, "Nuevo torneo" }
        }
        {match &*mine.read() {
            None => rsx! { Spinner {} },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { class: "muted", "Todavía no organizaste torneos." }
            },
            Some(Ok(list)) => rsx! {
                table { class: "table",
                    tbody {
                        for t in list.iter().cloned() {
                            tr { key: "{t.id}",
                                td { "{t.nombre}" }
                                td { "{t.fecha_inicio}" }
                                td { span { class: "badge", "{t.estado.label()}" } }
                                td { Link { to: Route::ManageTournament { id: t.id }, "Gestionar" } }
                            }
                        }
                    }
                }
            },
        }}
    }
}

#[component]
pub fn CreateTournament() -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let nav = use_navigator();
    let max_flyer_bytes = use_config().uploads.max_proof_bytes;
    let mut draft = use_signal(|| NewTournament {
        nombre: String::new(),
        descripcion: String::new(),
        ciudad: String::new(),
        fecha_inicio: String::new(),
        fecha_fin: String::new(),
        categoria_ids: Vec::new(),
        costo_inscripcion: 0,
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let categories = use_resource(move || async move { checked(session, categorias::list(&api()).await) });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let request = draft();
        if let Some(message) = draft_error(&request) {
            error.set(Some(message.to_string()));
            return;
        }
        let flyer = browser::picked_file(FLYER_INPUT_ID);
        if let Some((_, meta)) = &flyer {
            if let Err(e) = meta.check(max_flyer_bytes) {
                error.set(Some(e.to_string()));
                return;
            }
        }
        error.set(None);
        saving.set(true);
        spawn(async move {
            let client = api();
            let created = match checked(session, tournaments::create(&client, &request).await) {
                Ok(t) => t,
                Err(e) => {
                    error.set(Some(e.user_message()));
                    saving.set(false);
                    return;
                }
            };
            tracing::info!(tournament_id = created.id, "tournament created");
            if let Some((file, meta)) = flyer {
                let upload = match browser::file_bytes(&file).await {
                    Ok(bytes) => tournaments::upload_flyer(
                        &client,
                        created.id,
                        Upload { field: "flyer", file_name: meta.name, mime: meta.mime, bytes },
                    )
                    .await
                    .map(|_| ()),
                    Err(e) => Err(api::ApiError::InvalidUpload(e)),
                };
                if let Err(e) = upload {
                    toast(ui, ToastKind::Error, format!("El torneo se creó pero el flyer no: {e}"));
                }
            }
            toast(ui, ToastKind::Success, "Torneo creado");
            nav.replace(Route::ManageTournament { id: created.id });
        });
    };

    let all_categories = match &*categories.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let d = draft();

    rsx! {
        h1 { class: "page-title", "Nuevo torneo" }
        form { class: "form card", onsubmit: handle_create,
            FieldError { message: error() }
            Label { html_for: "t-nombre", "Nombre" }
            Input { id: "t-nombre", value: d.nombre.clone(), oninput: move |evt: FormEvent| draft.write().nombre = evt.value() }
            Label { html_for: "t-descripcion", "Descripción" }
            textarea {
                class: "input",
                id: "t-descripcion",
                value: "{d.descripcion}",
                oninput: move |evt: FormEvent| draft.write().descripcion = evt.value(),
            }
            Label { html_for: "t-ciudad", "Ciudad" }
            CityAutocomplete { id: "t-ciudad", value: d.ciudad.clone(), on_change: move |c: String| draft.write().ciudad = c }
            Label { html_for: "t-inicio", "Fecha de inicio" }
            Input { id: "t-inicio", r#type: "date", value: d.fecha_inicio.clone(), oninput: move |evt: FormEvent| draft.write().fecha_inicio = evt.value() }
            Label { html_for: "t-fin", "Fecha de fin" }
            Input { id: "t-fin", r#type: "date", value: d.fecha_fin.clone(), oninput: move |evt: FormEvent| draft.write().fecha_fin = evt.value() }
            Label { html_for: "t-costo", "Costo por pareja (Gs.)" }
            Input {
                id: "t-costo",
                r#type: "number",
                value: d.costo_inscripcion.to_string(),
                oninput: move |evt: FormEvent| draft.write().costo_inscripcion = evt.value().parse().unwrap_or(0),
            }
            fieldset { class: "radio-group",
                legend { class: "field-label", "Categorías" }
                for c in all_categories {
                    label { key: "{c.id}", class: "radio",
                        input {
                            r#type: "checkbox",
                            checked: d.categoria_ids.contains(&c.id),
                            onchange: move |_| {
                                let mut draft = draft.write();
                                match draft.categoria_ids.iter().position(|id| *id == c.id) {
                                    Some(i) => {
                                        draft.categoria_ids.remove(i);
                                    }
                                    None => draft.categoria_ids.push(c.id),
                                }
                            },
                        }
                        "{c.nombre}"
                    }
                }
            }
            Label { html_for: FLYER_INPUT_ID, "Flyer (opcional)" }
            input { id: FLYER_INPUT_ID, r#type: "file", accept: "image/*" }
            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: saving(),
                if saving() { "Creando..." } else { "Crear torneo" }
            }
        }
    }
}

fn draft_error(d: &NewTournament) -> Option<&'static str> {
    if d.nombre.trim().is_empty() {
        return Some("El nombre es obligatorio");
    }
    if d.ciudad.trim().is_empty() {
        return Some("Indicá la ciudad");
    }
    if d.fecha_inicio.is_empty() || d.fecha_fin.is_empty() {
        return Some("Indicá las fechas del torneo");
    }
    // ISO dates compare correctly as strings.
    if d.fecha_fin < d.fecha_inicio {
        return Some("La fecha de fin no puede ser anterior al inicio");
    }
    if d.categoria_ids.is_empty() {
        return Some("Elegí al menos una categoría");
    }
    None
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Inscriptions,
    Draw,
    Results,
    Circuit,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Inscriptions, Tab::Draw, Tab::Results, Tab::Circuit];

    fn label(&self) -> &'static str {
        match self {
            Tab::Inscriptions => "Inscripciones",
            Tab::Draw => "Sorteo",
            Tab::Results => "Resultados",
            Tab::Circuit => "Circuito",
        }
    }
}

/// Tabbed dashboard for one tournament.
#[component]
pub fn ManageTournament(id: i64) -> Element {
    let session = use_session();
    let api = use_api();
    let mut tab = use_signal(|| Tab::Inscriptions);

    let tournament = use_resource(use_reactive!(|id| async move {
        checked(session, tournaments::get(&api(), id).await)
    }));

    let t = match &*tournament.read() {
        None => return rsx! { Spinner {} },
        Some(Err(e)) => return rsx! { FieldError { message: e.user_message() } },
        Some(Ok(t)) => t.clone(),
    };

    rsx! {
        h1 { class: "page-title", "{t.nombre}" }
        p { class: "muted", "{t.ciudad} · {t.fecha_inicio} · {t.estado.label()}" }
        div { class: "tabs", role: "tablist",
            for candidate in Tab::ALL {
                button {
                    key: "{candidate.label()}",
                    class: tab_class(tab() == candidate),
                    role: "tab",
                    onclick: move |_| tab.set(candidate),
                    "{candidate.label()}"
                }
            }
        }
        {match tab() {
            Tab::Inscriptions => rsx! { InscriptionsTab { tournament_id: id } },
            Tab::Draw => rsx! { DrawTab { tournament: t.clone() } },
            Tab::Results => rsx! { ResultsTab { tournament_id: id } },
            Tab::Circuit => rsx! { CircuitTab { tournament_id: id } },
        }}
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab--active"
    } else {
        "tab"
    }
}

#[component]
fn InscriptionsTab(tournament_id: i64) -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let mut list = use_resource(use_reactive!(|tournament_id| async move {
        checked(session, tournaments::inscriptions(&api(), tournament_id).await)
    }));

    let confirm = move |inscripcion_id: i64| {
        spawn(async move {
            match checked(session, inscripciones::confirm(&api(), inscripcion_id).await) {
                Ok(_) => {
                    toast(ui, ToastKind::Success, "Pago confirmado");
                    list.restart();
                }
                Err(e) => toast(ui, ToastKind::Error, e.user_message()),
            }
        });
    };

    let rows: Vec<Inscripcion> = match &*list.read() {
        None => return rsx! { Spinner {} },
        Some(Err(e)) => return rsx! { FieldError { message: e.user_message() } },
        Some(Ok(rows)) => rows.clone(),
    };

    rsx! {
        p { class: "muted", "{rows.len()} parejas inscriptas" }
        table { class: "table",
            tbody {
                for row in rows {
                    tr { key: "{row.id}",
                        td { "{row.pareja.label()}" }
                        td { "Categoría #{row.categoria_id}" }
                        td { span { class: "badge", "{row.estado.label()}" } }
                        td {
                            if let Some(url) = row.comprobante_url.clone() {
                                a { href: "{url}", target: "_blank", rel: "noopener", "Comprobante" }
                            }
                        }
                        td {
                            if row.estado == InscripcionStatus::PendienteConfirmacion || row.estado == InscripcionStatus::PendientePago {
                                Button { onclick: move |_| confirm(row.id), "Confirmar pago" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DrawTab(tournament: Tournament) -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let mut running = use_signal(|| Option::<i64>::None);
    let tournament_id = tournament.id;

    let mut draw = move |categoria_id: i64| {
        running.set(Some(categoria_id));
        spawn(async move {
            match checked(session, matches::draw_category(&api(), tournament_id, categoria_id).await) {
                Ok(list) => toast(ui, ToastKind::Success, format!("Sorteo realizado: {} partidos", list.len())),
                Err(e) => toast(ui, ToastKind::Error, e.user_message()),
            }
            running.set(None);
        });
    };

    rsx! {
        p { class: "muted", "El sorteo genera el cuadro de cada categoría con las parejas confirmadas." }
        ul { class: "categories",
            for c in tournament.categorias.iter().cloned() {
                li { key: "{c.id}",
                    span { "{c.nombre}" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: running().is_some(),
                        onclick: move |_| draw(c.id),
                        if running() == Some(c.id) { "Sorteando..." } else { "Sortear" }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultsTab(tournament_id: i64) -> Element {
    let session = use_session();
    let api = use_api();
    let mut list = use_resource(use_reactive!(|tournament_id| async move {
        checked(session, matches::by_tournament(&api(), tournament_id).await)
    }));

    let rows: Vec<Match> = match &*list.read() {
        None => return rsx! { Spinner {} },
        Some(Err(e)) => return rsx! { FieldError { message: e.user_message() } },
        Some(Ok(rows)) => rows.clone(),
    };

    rsx! {
        if rows.is_empty() {
            p { class: "muted", "No hay partidos. Realizá el sorteo primero." }
        }
        for m in rows {
            div { key: "{m.id}", class: "card",
                p { class: "muted", "{m.ronda}" }
                MatchRow { m: m.clone() }
                if m.estado != MatchStatus::Finalizado && m.pareja1.is_some() && m.pareja2.is_some() {
                    ResultForm { match_id: m.id, on_saved: move |_| list.restart() }
                }
            }
        }
    }
}

/// Up to three sets, `6-4` style.
#[component]
fn ResultForm(match_id: i64, on_saved: EventHandler<()>) -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let mut sets = use_signal(|| vec![(String::new(), String::new()); 3]);
    let mut error = use_signal(|| Option::<String>::None);

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let result = match parse_sets(&sets()) {
            Ok(result) => result,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };
        error.set(None);
        spawn(async move {
            match checked(session, matches::set_result(&api(), match_id, &result).await) {
                Ok(_) => {
                    toast(ui, ToastKind::Success, "Resultado cargado");
                    on_saved.call(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let values = sets();

    rsx! {
        form { class: "result-form", onsubmit: save,
            FieldError { message: error() }
            for (i, (games1, games2)) in values.into_iter().enumerate() {
                div { key: "{i}", class: "result-form__set",
                    span { {format!("Set {}", i + 1)} }
                    input {
                        class: "input",
                        r#type: "number",
                        min: "0",
                        value: games1,
                        oninput: move |evt: FormEvent| sets.write()[i].0 = evt.value(),
                    }
                    input {
                        class: "input",
                        r#type: "number",
                        min: "0",
                        value: games2,
                        oninput: move |evt: FormEvent| sets.write()[i].1 = evt.value(),
                    }
                }
            }
            Button { r#type: "submit", "Guardar resultado" }
        }
    }
}

/// Blank rows are skipped; a result needs a winner.
fn parse_sets(raw: &[(String, String)]) -> Result<MatchResult, &'static str> {
    let mut sets = Vec::new();
    for (a, b) in raw {
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() && b.is_empty() {
            continue;
        }
        let (Ok(pareja1), Ok(pareja2)) = (a.parse::<u8>(), b.parse::<u8>()) else {
            return Err("Los games deben ser números");
        };
        sets.push(SetScore { pareja1, pareja2 });
    }
    if sets.is_empty() {
        return Err("Cargá al menos un set");
    }
    let result = MatchResult { sets };
    if result.winner_side().is_none() {
        return Err("El resultado no define un ganador");
    }
    Ok(result)
}

#[component]
fn CircuitTab(tournament_id: i64) -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let mut selected = use_signal(String::new);
    let list = use_resource(move || async move { checked(session, circuitos::list(&api()).await) });

    let add = move |_: MouseEvent| {
        let Ok(circuito_id) = selected().parse::<i64>() else {
            return;
        };
        spawn(async move {
            match checked(session, circuitos::add_tournament(&api(), circuito_id, tournament_id).await) {
                Ok(c) => toast(ui, ToastKind::Success, format!("Torneo agregado a {}", c.nombre)),
                Err(e) => toast(ui, ToastKind::Error, e.user_message()),
            }
        });
    };

    let options: Vec<(String, String)> = match &*list.read() {
        Some(Ok(list)) => list.iter().map(|c| (c.id.to_string(), c.nombre.clone())).collect(),
        Some(Err(e)) => return rsx! { FieldError { message: e.user_message() } },
        None => return rsx! { Spinner {} },
    };

    rsx! {
        p { class: "muted", "Sumá este torneo a un circuito para que otorgue puntos en su clasificación." }
        Select {
            id: "circuit-select",
            options: options,
            value: selected(),
            placeholder: "Elegí un circuito",
            onchange: move |v: String| selected.set(v),
        }
        Button { disabled: selected().is_empty(), onclick: add, "Agregar al circuito" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(sets: &[(&str, &str)]) -> Vec<(String, String)> {
        sets.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
    }

    #[test]
    fn parses_sets_and_skips_blank_rows() {
        let result = parse_sets(&raw(&[("6", "4"), ("", ""), ("7", "5")])).unwrap();
        assert_eq!(result.sets.len(), 2);
        assert_eq!(result.winner_side(), Some(1));
    }

    #[test]
    fn rejects_non_numeric_and_tied_results() {
        assert!(parse_sets(&raw(&[("6", "x")])).is_err());
        assert!(parse_sets(&raw(&[("6", "4"), ("4", "6")])).is_err());
        assert!(parse_sets(&raw(&[("", "")])).is_err());
    }

    #[test]
    fn draft_requires_categories_and_ordered_dates() {
        let mut d = NewTournament {
            nombre: "Copa Luque".into(),
            descripcion: String::new(),
            ciudad: "Luque".into(),
            fecha_inicio: "2026-11-10".into(),
            fecha_fin: "2026-11-08".into(),
            categoria_ids: vec![],
            costo_inscripcion: 150_000,
        };
        assert_eq!(draft_error(&d), Some("La fecha de fin no puede ser anterior al inicio"));
        d.fecha_fin = "2026-11-12".into();
        assert_eq!(draft_error(&d), Some("Elegí al menos una categoría"));
        d.categoria_ids.push(3);
        assert_eq!(draft_error(&d), None);
    }
}
