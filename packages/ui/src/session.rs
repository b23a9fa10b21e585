//! Session context for the UI.
//!
//! [`SessionProvider`] restores the cached session on mount, revalidates it
//! with `GET /auth/me`, and keeps an [`ApiClient`] context whose bearer
//! token follows the session. Pages read both through [`use_session`] and
//! [`use_api`].

use api::services::auth;
use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{ClientConfig, Session, SessionState, SessionStore};

/// The platform session store: `localStorage` on the web, memory elsewhere.
pub fn make_session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Current session state. Updates on login, logout and 401.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// API client carrying the current session's token.
pub fn use_api() -> Signal<ApiClient> {
    use_context::<Signal<ApiClient>>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Store a fresh session (after login or register).
pub async fn sign_in(mut state: Signal<SessionState>, session: Session) {
    make_session_store().save(&session).await;
    state.set(SessionState::Authenticated(session));
}

/// Drop the session everywhere. Protected routes then redirect to login.
pub async fn sign_out(mut state: Signal<SessionState>) {
    make_session_store().clear().await;
    state.set(SessionState::Anonymous);
}

/// Clears the session when `err` means the token is no longer valid.
/// Returns `true` if it did.
pub fn handle_unauthorized(state: Signal<SessionState>, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    tracing::info!("session rejected by server, signing out");
    spawn(sign_out(state));
    true
}

#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let mut state = use_signal(SessionState::default);
    let base = use_hook(|| ApiClient::new(&config));
    let mut api = use_signal(|| base.clone());

    use_context_provider(|| config.clone());

    // Restore and revalidate the cached session once.
    let _restore = use_resource(move || async move {
        let store = make_session_store();
        let Some(cached) = store.load().await else {
            state.set(SessionState::Anonymous);
            return;
        };
        let probe = api.peek().with_token(Some(cached.token.clone()));
        match auth::me(&probe).await {
            Ok(user) => {
                let session = cached.with_user(user);
                store.save(&session).await;
                tracing::info!(user_id = session.user.id, "session restored");
                state.set(SessionState::Authenticated(session));
            }
            Err(ApiError::Unauthorized) => {
                store.clear().await;
                state.set(SessionState::Anonymous);
            }
            Err(e) => {
                // Offline or server hiccup: trust the cached user for now.
                tracing::warn!(error = %e, "could not revalidate session");
                state.set(SessionState::Authenticated(cached));
            }
        }
    });

    // Keep the client's token in step with the session.
    use_effect(move || {
        let token = state.read().token().map(str::to_string);
        if api.peek().token() != token.as_deref() {
            let next = api.peek().with_token(token);
            api.set(next);
        }
    });

    use_context_provider(|| state);
    use_context_provider(|| api);

    rsx! {
        {children}
    }
}
