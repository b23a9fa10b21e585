use api::services::tournaments::{self, TournamentFilter};
use dioxus::prelude::*;
use store::models::BannerZone;
use ui::components::{FieldError, Spinner};
use ui::{use_api, use_session, BannerArea};

use super::checked;
use super::tournaments::TournamentCard;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let api = use_api();

    let open = use_resource(move || async move {
        let filter = TournamentFilter {
            estado: Some("INSCRIPCIONES_ABIERTAS".to_string()),
            ..Default::default()
        };
        checked(session, tournaments::list(&api(), &filter).await)
    });

    let greeting = session
        .read()
        .user()
        .map(|u| format!("Hola, {}", u.nombre))
        .unwrap_or_else(|| "Torneos de pádel en todo Paraguay".to_string());

    rsx! {
        section { class: "hero",
            h1 { class: "page-title", "{greeting}" }
            p { class: "muted", "Inscribite con tu pareja, pagá online y seguí el cuadro en vivo." }
        }
        BannerArea { zone: BannerZone::HomeTop }
        h2 { "Inscripciones abiertas" }
        {match &*open.read() {
            None => rsx! { Spinner {} },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { class: "muted", "No hay torneos con inscripciones abiertas por ahora." }
            },
            Some(Ok(list)) => rsx! {
                div { class: "grid",
                    for t in list.iter().take(6).cloned() {
                        TournamentCard { key: "{t.id}", tournament: t.clone() }
                    }
                }
                Link { to: Route::Tournaments { ciudad: String::new() }, "Ver todos los torneos" }
            },
        }}
    }
}
