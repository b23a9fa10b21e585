use std::sync::{Arc, Mutex};

use crate::session::{Session, SessionStore};

/// In-memory SessionStore for testing and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw contents, as if a previous page load wrote them.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.to_string()))),
        }
    }
}

impl SessionStore for MemoryStore {
    async fn load(&self) -> Option<Session> {
        let raw = self.slot.lock().ok()?.clone()?;
        Session::from_json(&raw).ok()
    }

    async fn save(&self, session: &Session) {
        let Ok(raw) = session.to_json() else {
            return;
        };
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(raw);
        }
    }

    async fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};

    fn session() -> Session {
        Session::new(
            "tok-123".to_string(),
            User {
                id: 3,
                nombre: "Sofía".into(),
                apellido: "Ramírez".into(),
                email: "sofia@example.com".into(),
                documento: "5123456".into(),
                roles: vec![Role::Player],
                es_premium: true,
                foto_url: None,
                ciudad: Some("Asunción".into()),
                telefono: None,
            },
        )
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let store = MemoryStore::new();
        assert!(store.load().await.is_none());

        store.save(&session()).await;
        assert_eq!(store.load().await, Some(session()));

        store.clear().await;
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_contents_load_as_none() {
        let store = MemoryStore::with_raw("{not json");
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save(&session()).await;
        assert_eq!(other.load().await.map(|s| s.token), Some("tok-123".to_string()));
    }
}
