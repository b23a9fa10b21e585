//! `/admin`: back-office. Moderation decisions are recorded, not computed,
//! here.

use serde::Serialize;
use store::models::{PhotoDecision, PhotoReview, User};

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
struct DecisionBody {
    decision: PhotoDecision,
}

/// `GET /admin/fotos/pendientes`
pub async fn pending_photos(api: &ApiClient) -> Result<Vec<PhotoReview>, ApiError> {
    api.get("/admin/fotos/pendientes").await
}

/// `PATCH /admin/fotos/{id}`
pub async fn review_photo(api: &ApiClient, id: i64, decision: PhotoDecision) -> Result<(), ApiError> {
    api.patch_unit(&format!("/admin/fotos/{id}"), &DecisionBody { decision }).await
}

/// `GET /admin/usuarios`
pub async fn users(api: &ApiClient) -> Result<Vec<User>, ApiError> {
    api.get("/admin/usuarios").await
}
