//! Route guard wrapping protected layouts.

use dioxus::prelude::*;
use store::guard::login_url;
use store::models::Role;
use store::{authorize, GuardDecision};

use crate::components::Spinner;
use crate::use_session;

/// Renders `children` only when the session may see `path`.
///
/// - restoring: loading state, no redirect yet
/// - anonymous: `/login?next=<path>`
/// - missing `role` (admins pass every check): `/`
#[component]
pub fn RouteGuard(path: String, role: Option<Role>, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let decision = authorize(&session.read(), role, &path);

    use_effect(use_reactive!(|decision| match decision {
        GuardDecision::RedirectLogin { next } => {
            tracing::debug!(%next, "guard: not signed in");
            nav.replace(NavigationTarget::Internal(login_url(&next)));
        }
        GuardDecision::RedirectHome => {
            tracing::debug!("guard: missing role");
            nav.replace(NavigationTarget::Internal("/".to_string()));
        }
        GuardDecision::Pending | GuardDecision::Allow => {}
    }));

    match decision {
        GuardDecision::Allow => rsx! { {children} },
        GuardDecision::Pending => rsx! { Spinner {} },
        _ => rsx! {},
    }
}
