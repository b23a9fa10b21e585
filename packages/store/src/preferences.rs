//! Notification preferences with optimistic, single-field rollback.
//!
//! A toggle is a [`ToggleCommand`]: apply it locally, send the PATCH, and on
//! failure [`PreferenceSet::revert`] exactly that field of that row. Other
//! rows, and the other channel of the same row, are never touched by a
//! rollback, even if they changed while the request was in flight.

use serde::Serialize;
use thiserror::Error;

use crate::models::NotificationPreference;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Email,
    Sms,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "Email",
            Channel::Sms => "SMS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("Las notificaciones por SMS requieren una suscripción premium")]
    SmsRequiresPremium,
    #[error("Tipo de notificación desconocido: {0}")]
    UnknownKind(String),
}

/// One optimistic toggle, with enough information to undo it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleCommand {
    pub tipo: String,
    pub channel: Channel,
    pub previous: bool,
    pub next: bool,
}

/// Body of `PATCH /notificaciones/preferencias/{tipo}`: only the changed field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreferencePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<bool>,
}

impl ToggleCommand {
    pub fn patch(&self) -> PreferencePatch {
        match self.channel {
            Channel::Email => PreferencePatch {
                email: Some(self.next),
                sms: None,
            },
            Channel::Sms => PreferencePatch {
                email: None,
                sms: Some(self.next),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreferenceSet {
    rows: Vec<NotificationPreference>,
}

impl PreferenceSet {
    pub fn new(rows: Vec<NotificationPreference>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[NotificationPreference] {
        &self.rows
    }

    pub fn get(&self, tipo: &str) -> Option<&NotificationPreference> {
        self.rows.iter().find(|r| r.tipo == tipo)
    }

    /// Flip `channel` on row `tipo` locally and return the command to send.
    /// SMS is refused for non-premium users before anything changes.
    pub fn toggle(
        &mut self,
        tipo: &str,
        channel: Channel,
        premium: bool,
    ) -> Result<ToggleCommand, PreferenceError> {
        if channel == Channel::Sms && !premium {
            return Err(PreferenceError::SmsRequiresPremium);
        }
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.tipo == tipo)
            .ok_or_else(|| PreferenceError::UnknownKind(tipo.to_string()))?;
        let field = field_mut(row, channel);
        let previous = *field;
        *field = !previous;
        Ok(ToggleCommand {
            tipo: tipo.to_string(),
            channel,
            previous,
            next: !previous,
        })
    }

    /// Undo a failed command: restore only its field, only if it still holds
    /// the value the command wrote.
    pub fn revert(&mut self, cmd: &ToggleCommand) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.tipo == cmd.tipo) {
            let field = field_mut(row, cmd.channel);
            if *field == cmd.next {
                *field = cmd.previous;
            }
        }
    }
}

fn field_mut(row: &mut NotificationPreference, channel: Channel) -> &mut bool {
    match channel {
        Channel::Email => &mut row.email,
        Channel::Sms => &mut row.sms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pref(tipo: &str, email: bool, sms: bool) -> NotificationPreference {
        NotificationPreference {
            tipo: tipo.into(),
            descripcion: String::new(),
            email,
            sms,
        }
    }

    fn set() -> PreferenceSet {
        PreferenceSet::new(vec![
            pref("INSCRIPCION_CONFIRMADA", true, false),
            pref("PARTIDO_PROGRAMADO", false, true),
            pref("RESULTADO_CARGADO", true, true),
        ])
    }

    #[test]
    fn toggle_applies_locally_and_builds_single_field_patch() {
        let mut prefs = set();
        let cmd = prefs
            .toggle("INSCRIPCION_CONFIRMADA", Channel::Email, false)
            .unwrap();
        assert_eq!(cmd.previous, true);
        assert_eq!(cmd.next, false);
        assert!(!prefs.get("INSCRIPCION_CONFIRMADA").unwrap().email);
        assert_eq!(
            serde_json::to_string(&cmd.patch()).unwrap(),
            r#"{"email":false}"#
        );
    }

    #[test]
    fn failed_update_restores_only_the_toggled_field() {
        let before = set();
        let mut prefs = before.clone();
        let cmd = prefs
            .toggle("PARTIDO_PROGRAMADO", Channel::Sms, true)
            .unwrap();
        prefs.revert(&cmd);
        assert_eq!(prefs, before);
    }

    #[test]
    fn rollback_leaves_concurrent_changes_alone() {
        let mut prefs = set();
        let failing = prefs
            .toggle("RESULTADO_CARGADO", Channel::Email, true)
            .unwrap();
        let succeeding = prefs
            .toggle("RESULTADO_CARGADO", Channel::Sms, true)
            .unwrap();
        let other = prefs
            .toggle("PARTIDO_PROGRAMADO", Channel::Email, true)
            .unwrap();

        prefs.revert(&failing);

        let row = prefs.get("RESULTADO_CARGADO").unwrap();
        assert!(row.email, "toggled field restored");
        assert_eq!(row.sms, succeeding.next, "other channel untouched");
        assert_eq!(
            prefs.get("PARTIDO_PROGRAMADO").unwrap().email,
            other.next,
            "other row untouched"
        );
        assert_eq!(prefs.get("INSCRIPCION_CONFIRMADA"), set().get("INSCRIPCION_CONFIRMADA"));
    }

    #[test]
    fn sms_without_premium_is_refused_without_change() {
        let mut prefs = set();
        assert_eq!(
            prefs.toggle("INSCRIPCION_CONFIRMADA", Channel::Sms, false),
            Err(PreferenceError::SmsRequiresPremium)
        );
        assert_eq!(prefs, set());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let mut prefs = set();
        assert!(matches!(
            prefs.toggle("NOPE", Channel::Email, true),
            Err(PreferenceError::UnknownKind(_))
        ));
    }
}
