//! `/categorias`: category catalogue and promotion requests. The promotion
//! rules themselves are applied by the server.

use serde::Serialize;
use store::models::{Category, User};

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangeCategoryBody {
    categoria_id: i64,
}

/// `GET /categorias`
pub async fn list(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    api.get("/categorias").await
}

/// `PATCH /categorias/cambiar`
pub async fn change(api: &ApiClient, categoria_id: i64) -> Result<User, ApiError> {
    api.patch("/categorias/cambiar", &ChangeCategoryBody { categoria_id }).await
}
