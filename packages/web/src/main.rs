use dioxus::prelude::*;

use store::models::Role;
use store::ClientConfig;
use ui::{ErrorFallback, Navbar, RouteGuard, SessionProvider, UiProvider};
use views::{
    Admin, CircuitoDetail, Circuitos, CreateTournament, Home, Login, ManageTournament, Messages,
    MyInscriptions, NotFound, Notifications, Organizer, Profile, Rankings, Register, Subscription,
    TournamentDetail, Tournaments,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login?:next")]
        Login { next: String },
        #[route("/registro")]
        Register {},
        #[route("/torneos?:ciudad")]
        Tournaments { ciudad: String },
        #[route("/torneos/:id")]
        TournamentDetail { id: i64 },
        #[route("/rankings")]
        Rankings {},
        #[route("/circuitos")]
        Circuitos {},
        #[route("/circuitos/:id")]
        CircuitoDetail { id: i64 },

        #[layout(PlayerArea)]
            #[route("/mis-inscripciones")]
            MyInscriptions {},
            #[route("/notificaciones")]
            Notifications {},
            #[route("/perfil")]
            Profile {},
            #[route("/mensajes")]
            Messages {},
            #[route("/premium")]
            Subscription {},
        #[end_layout]

        #[layout(OrganizerArea)]
            #[route("/organizador")]
            Organizer {},
            #[route("/organizador/torneos/nuevo")]
            CreateTournament {},
            #[route("/organizador/torneos/:id")]
            ManageTournament { id: i64 },
        #[end_layout]

        #[layout(AdminArea)]
            #[route("/admin")]
            Admin {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ClientConfig::from_env().unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid FAIRPADEL_CONFIG, using defaults");
            ClientConfig::default()
        });
        tracing::info!(api = %config.api.base_url, "starting FairPadel");
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::FAIRPADEL_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider { config: config,
            UiProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Navbar plus the page, with rendering errors contained below the navbar.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        main { class: "page",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    tracing::error!("page failed to render");
                    rsx! {
                        ErrorFallback { on_retry: move |_| errors.clear_errors() }
                    }
                },
                Outlet::<Route> {}
            }
        }
    }
}

/// Any signed-in user.
#[component]
fn PlayerArea() -> Element {
    let path = use_route::<Route>().to_string();
    rsx! {
        RouteGuard { path: path, role: None, Outlet::<Route> {} }
    }
}

#[component]
fn OrganizerArea() -> Element {
    let path = use_route::<Route>().to_string();
    rsx! {
        RouteGuard { path: path, role: Some(Role::Organizer), Outlet::<Route> {} }
    }
}

#[component]
fn AdminArea() -> Element {
    let path = use_route::<Route>().to_string();
    rsx! {
        RouteGuard { path: path, role: Some(Role::Admin), Outlet::<Route> {} }
    }
}
