//! Transient UI state: toasts, the open modal and the mobile sidebar.
//!
//! Kept separate from the session so a toast never re-renders the session
//! consumers. Auto-dismiss timing lives in the UI layer; this type only
//! records what is visible.

/// Default toast lifetime.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Modals that can be opened from anywhere in the app shell.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalKind {
    Inscription { tournament_id: i64 },
    Payment { inscripcion_id: i64 },
    ConfirmLogout,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    pub modal: Option<ModalKind>,
    pub sidebar_open: bool,
    next_id: u64,
}

impl UiState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast. Dismissing an id that is already gone is a no-op.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn open_modal(&mut self, modal: ModalKind) {
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_get_unique_ids_and_dismiss_individually() {
        let mut ui = UiState::default();
        let a = ui.push_toast(ToastKind::Success, "Inscripción creada");
        let b = ui.push_toast(ToastKind::Error, "Error de red");
        assert_ne!(a, b);

        ui.dismiss_toast(a);
        assert_eq!(ui.toasts.len(), 1);
        assert_eq!(ui.toasts[0].id, b);

        ui.dismiss_toast(a);
        assert_eq!(ui.toasts.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let mut ui = UiState::default();
        let a = ui.push_toast(ToastKind::Info, "uno");
        ui.dismiss_toast(a);
        let b = ui.push_toast(ToastKind::Info, "dos");
        assert!(b > a);
    }

    #[test]
    fn modal_open_close() {
        let mut ui = UiState::default();
        ui.open_modal(ModalKind::Payment { inscripcion_id: 9 });
        assert_eq!(ui.modal, Some(ModalKind::Payment { inscripcion_id: 9 }));
        ui.close_modal();
        assert!(ui.modal.is_none());
    }
}
