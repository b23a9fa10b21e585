//! Direct messages between players, plus player search and follows.

use api::services::{social, users};
use dioxus::prelude::*;
use store::models::{Conversation, PlayerSummary};
use store::ToastKind;
use ui::components::{Button, ButtonVariant, FieldError, Input, Spinner};
use ui::{toast, use_api, use_session, use_ui};

use super::checked;

#[component]
pub fn Messages() -> Element {
    let session = use_session();
    let api = use_api();
    let mut selected = use_signal(|| Option::<Conversation>::None);

    let conversations = use_resource(move || async move { checked(session, social::conversations(&api()).await) });

    rsx! {
        h1 { class: "page-title", "Mensajes" }
        div { class: "messages",
            aside { class: "messages__list",
                PlayerSearch {}
                {match &*conversations.read() {
                    None => rsx! { Spinner {} },
                    Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
                    Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "Todavía no tenés conversaciones." } },
                    Some(Ok(list)) => rsx! {
                        ul {
                            for c in list.iter().cloned() {
                                ConversationItem {
                                    key: "{c.id}",
                                    active: selected.read().as_ref().map(|s| s.id) == Some(c.id),
                                    conversation: c.clone(),
                                    on_select: move |c: Conversation| selected.set(Some(c)),
                                }
                            }
                        }
                    },
                }}
            }
            section { class: "messages__thread",
                if let Some(c) = selected() {
                    Thread { key: "{c.id}", conversation: c.clone() }
                } else {
                    p { class: "muted", "Elegí una conversación." }
                }
            }
        }
    }
}

#[component]
fn ConversationItem(conversation: Conversation, active: bool, on_select: EventHandler<Conversation>) -> Element {
    let name = conversation.con.full_name();
    let unread = conversation.no_leidos;
    let last = conversation.ultimo_mensaje.clone();
    rsx! {
        li {
            class: conversation_class(active),
            onclick: move |_| on_select.call(conversation.clone()),
            strong { "{name}" }
            if unread > 0 {
                span { class: "badge", "{unread}" }
            }
            if let Some(last) = last {
                p { class: "muted", "{last}" }
            }
        }
    }
}

fn conversation_class(active: bool) -> &'static str {
    if active {
        "conversation conversation--active"
    } else {
        "conversation"
    }
}

#[component]
fn Thread(conversation: Conversation) -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let conversation_id = conversation.id;
    let peer_id = conversation.con.id;
    let own_id = session.read().user().map(|u| u.id);

    let mut thread = use_resource(move || async move {
        checked(session, social::messages(&api(), conversation_id).await)
    });

    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let text = draft().trim().to_string();
        if text.is_empty() {
            return;
        }
        sending.set(true);
        spawn(async move {
            match checked(session, social::send_message(&api(), peer_id, &text).await) {
                Ok(_) => {
                    draft.set(String::new());
                    thread.restart();
                }
                Err(e) => toast(ui, ToastKind::Error, e.user_message()),
            }
            sending.set(false);
        });
    };

    rsx! {
        h2 { "{conversation.con.full_name()}" }
        {match &*thread.read() {
            None => rsx! { Spinner {} },
            Some(Err(e)) => rsx! { FieldError { message: e.user_message() } },
            Some(Ok(list)) => rsx! {
                ul { class: "thread",
                    for m in list.iter() {
                        li { key: "{m.id}", class: bubble_class(Some(m.autor_id) == own_id),
                            p { "{m.contenido}" }
                            span { class: "muted", "{m.enviado_en}" }
                        }
                    }
                }
            },
        }}
        form { class: "thread__compose", onsubmit: send,
            Input {
                id: "compose",
                placeholder: "Escribí un mensaje",
                value: draft(),
                oninput: move |evt: FormEvent| draft.set(evt.value()),
            }
            Button { variant: ButtonVariant::Primary, r#type: "submit", disabled: sending(), "Enviar" }
        }
    }
}

fn bubble_class(own: bool) -> &'static str {
    if own {
        "bubble bubble--own"
    } else {
        "bubble"
    }
}

/// Find players by name and follow or unfollow them.
#[component]
fn PlayerSearch() -> Element {
    let session = use_session();
    let api = use_api();
    let ui = use_ui();
    let mut query = use_signal(String::new);

    let mut following = use_resource(move || async move { checked(session, social::following(&api()).await) });
    let results = use_resource(move || async move {
        let q = query().trim().to_string();
        if q.len() < 2 {
            return Ok(Vec::new());
        }
        checked(session, users::search(&api(), &q).await)
    });

    let followed_ids: Vec<i64> = match &*following.read() {
        Some(Ok(list)) => list.iter().map(|p| p.id).collect(),
        _ => Vec::new(),
    };

    let toggle_follow = move |player: PlayerSummary, follows: bool| {
        spawn(async move {
            let result = if follows {
                social::unfollow(&api(), player.id).await
            } else {
                social::follow(&api(), player.id).await
            };
            match checked(session, result) {
                Ok(()) => following.restart(),
                Err(e) => toast(ui, ToastKind::Error, e.user_message()),
            }
        });
    };

    rsx! {
        div { class: "player-search",
            Input {
                id: "player-search",
                placeholder: "Buscar jugadores",
                value: query(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            if let Some(Ok(found)) = &*results.read() {
                ul {
                    for p in found.iter().cloned() {
                        PlayerRow {
                            key: "{p.id}",
                            follows: followed_ids.contains(&p.id),
                            player: p.clone(),
                            on_toggle: move |(player, follows): (PlayerSummary, bool)| toggle_follow(player, follows),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlayerRow(player: PlayerSummary, follows: bool, on_toggle: EventHandler<(PlayerSummary, bool)>) -> Element {
    let label = if follows { "Dejar de seguir" } else { "Seguir" };
    let name = player.full_name();
    rsx! {
        li { class: "player-row",
            span { "{name}" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| on_toggle.call((player.clone(), follows)),
                "{label}"
            }
        }
    }
}
