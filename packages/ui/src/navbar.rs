//! Top navigation bar with role-aware links and the logout confirmation.

use dioxus::prelude::*;
use store::models::Role;
use store::ModalKind;

use crate::components::{Button, ButtonVariant, ModalOverlay};
use crate::icons::{FaBars, FaBell, FaRightFromBracket};
use crate::{sign_out, use_session, use_ui, Icon};

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let mut ui = use_ui();
    let nav = use_navigator();

    let state = session.read().clone();
    let user = state.user().cloned();
    let menu_class = if ui.read().sidebar_open { "nav__links nav__links--open" } else { "nav__links" };
    let confirming = ui.read().modal == Some(ModalKind::ConfirmLogout);

    rsx! {
        nav { class: "nav",
            Link { class: "nav__brand", to: "/", "FairPadel" }
            button {
                class: "nav__toggle",
                aria_label: "Menú",
                onclick: move |_| ui.write().toggle_sidebar(),
                Icon { icon: FaBars, width: 18, height: 18 }
            }
            div { class: "{menu_class}",
                Link { to: "/torneos", "Torneos" }
                Link { to: "/rankings", "Rankings" }
                Link { to: "/circuitos", "Circuitos" }
                if let Some(user) = user.clone() {
                    Link { to: "/mis-inscripciones", "Mis inscripciones" }
                    Link { to: "/mensajes", "Mensajes" }
                    if user.has_role(Role::Organizer) {
                        Link { to: "/organizador", "Organizar" }
                    }
                    if user.is_admin() {
                        Link { to: "/admin", "Admin" }
                    }
                }
            }
            div { class: "nav__user",
                {match user {
                    Some(user) => rsx! {
                        Link { to: "/notificaciones",
                            span { class: "sr-only", "Notificaciones" }
                            Icon { icon: FaBell, width: 16, height: 16 }
                        }
                        Link { to: "/perfil", "{user.nombre}" }
                        button {
                            class: "nav__logout",
                            aria_label: "Cerrar sesión",
                            onclick: move |_| ui.write().open_modal(ModalKind::ConfirmLogout),
                            Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                        }
                    },
                    None if state.is_restoring() => rsx! {},
                    None => rsx! {
                        Link { to: "/login", "Ingresar" }
                        Link { class: "btn btn--primary", to: "/registro", "Crear cuenta" }
                    },
                }}
            }
        }
        if confirming {
            ModalOverlay {
                on_close: move |_| ui.write().close_modal(),
                title: "Cerrar sesión",
                div { class: "modal-body",
                    p { "¿Querés cerrar tu sesión?" }
                    div { class: "modal-actions",
                        Button { variant: ButtonVariant::Ghost, onclick: move |_| ui.write().close_modal(), "Cancelar" }
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: move |_| {
                                ui.write().close_modal();
                                spawn(async move {
                                    sign_out(session).await;
                                    tracing::info!("logged out");
                                    nav.replace(NavigationTarget::Internal("/".to_string()));
                                });
                            },
                            "Cerrar sesión"
                        }
                    }
                }
            }
        }
    }
}
