use api::ApiError;
use dioxus::prelude::*;
use store::SessionState;

mod admin;
pub use admin::Admin;

mod auth;
pub use auth::{Login, Register};

mod circuitos;
pub use circuitos::{CircuitoDetail, Circuitos};

mod home;
pub use home::Home;

mod inscriptions;
pub use inscriptions::MyInscriptions;

mod messages;
pub use messages::Messages;

mod not_found;
pub use not_found::NotFound;

mod notifications;
pub use notifications::Notifications;

mod organizer;
pub use organizer::{CreateTournament, ManageTournament, Organizer};

mod profile;
pub use profile::Profile;

mod rankings;
pub use rankings::Rankings;

mod subscription;
pub use subscription::Subscription;

mod tournaments;
pub use tournaments::{TournamentDetail, Tournaments};

/// Pass a service result through, signing out if the token was rejected.
pub(crate) fn checked<T>(
    session: Signal<SessionState>,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    if let Err(e) = &result {
        ui::handle_unauthorized(session, e);
    }
    result
}
