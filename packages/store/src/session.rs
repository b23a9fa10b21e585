//! # Session snapshot and its persistence
//!
//! A [`Session`] is the bearer token plus the user it was issued for. It is
//! immutable: login produces a new one, logout or a 401 replaces it with
//! nothing. The UI keeps the current [`SessionState`] in a context signal and
//! persists the session through a [`SessionStore`] so a reload can restore it.
//!
//! Implementations live in sibling modules ([`crate::memory`],
//! [`crate::local`]).

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Storage key for the cached session.
pub const SESSION_KEY: &str = "fairpadel.session";

/// Bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: String, user: User) -> Self {
        Self { token, user }
    }

    /// Same token, refreshed user record (e.g. after `/auth/me` or a profile edit).
    pub fn with_user(&self, user: User) -> Self {
        Self {
            token: self.token.clone(),
            user,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Where the session currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// The cached session is being loaded and revalidated.
    #[default]
    Restoring,
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(s) => Some(s),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }

    pub fn is_restoring(&self) -> bool {
        matches!(self, SessionState::Restoring)
    }
}

/// Async persistence for the cached session.
pub trait SessionStore {
    fn load(&self) -> impl std::future::Future<Output = Option<Session>>;
    fn save(&self, session: &Session) -> impl std::future::Future<Output = ()>;
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}
