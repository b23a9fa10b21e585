//! `/notificaciones`: inbox and delivery preferences.

use store::models::{Notificacion, NotificationPreference};
use store::preferences::ToggleCommand;

use crate::{ApiClient, ApiError};

/// `GET /notificaciones`
pub async fn list(api: &ApiClient) -> Result<Vec<Notificacion>, ApiError> {
    api.get("/notificaciones").await
}

/// `PATCH /notificaciones/{id}/leida`
pub async fn mark_read(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.patch_unit(&format!("/notificaciones/{id}/leida"), &serde_json::json!({})).await
}

/// `GET /notificaciones/preferencias`
pub async fn preferences(api: &ApiClient) -> Result<Vec<NotificationPreference>, ApiError> {
    api.get("/notificaciones/preferencias").await
}

/// `PATCH /notificaciones/preferencias/{tipo}` with only the toggled field.
pub async fn update_preference(api: &ApiClient, cmd: &ToggleCommand) -> Result<(), ApiError> {
    api.patch_unit(
        &format!("/notificaciones/preferencias/{}", cmd.tipo),
        &cmd.patch(),
    )
    .await
}
