//! `/users`: own profile, achievements and photo.

use serde::Serialize;
use store::models::{Logro, PlayerSummary, User};

use crate::{ApiClient, ApiError, Upload};

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub ciudad: String,
}

/// `PATCH /users/perfil`
pub async fn update_profile(api: &ApiClient, update: &ProfileUpdate) -> Result<User, ApiError> {
    api.patch("/users/perfil", update).await
}

/// `POST /users/foto` (multipart)
pub async fn upload_photo(api: &ApiClient, file: Upload) -> Result<User, ApiError> {
    api.upload("/users/foto", file).await
}

/// `GET /users/{id}/logros`
pub async fn achievements(api: &ApiClient, user_id: i64) -> Result<Vec<Logro>, ApiError> {
    api.get(&format!("/users/{user_id}/logros")).await
}

/// `GET /users/buscar?q=..`
pub async fn search(api: &ApiClient, query: &str) -> Result<Vec<PlayerSummary>, ApiError> {
    api.get_query("/users/buscar", &[("q", query)]).await
}
