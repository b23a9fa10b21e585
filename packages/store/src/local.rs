//! # localStorage session store
//!
//! [`LocalStore`] is the [`SessionStore`] used on the **web platform**. It
//! keeps the serialized [`Session`] under a single key in
//! `window.localStorage`.
//!
//! Errors are swallowed: an unavailable or corrupted storage degrades to
//! "no cached session" and the user simply logs in again.

use crate::session::{Session, SessionStore, SESSION_KEY};

#[derive(Clone, Debug)]
pub struct LocalStore {
    key: String,
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStore {
    pub fn new() -> Self {
        Self {
            key: SESSION_KEY.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    async fn load(&self) -> Option<Session> {
        let raw = Self::storage()?.get_item(&self.key).ok()??;
        Session::from_json(&raw).ok()
    }

    async fn save(&self, session: &Session) {
        let (Some(storage), Ok(raw)) = (Self::storage(), session.to_json()) else {
            return;
        };
        let _ = storage.set_item(&self.key, &raw);
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
