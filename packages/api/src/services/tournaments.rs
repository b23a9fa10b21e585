//! `/tournaments`

use serde::Serialize;
use store::models::{BankAccount, Inscripcion, NewTournament, Tournament};

use crate::{ApiClient, ApiError, Upload};

#[derive(Clone, Debug, Default, Serialize)]
pub struct TournamentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciudad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

/// `GET /tournaments`
pub async fn list(api: &ApiClient, filter: &TournamentFilter) -> Result<Vec<Tournament>, ApiError> {
    api.get_query("/tournaments", filter).await
}

/// `GET /tournaments/{id}`
pub async fn get(api: &ApiClient, id: i64) -> Result<Tournament, ApiError> {
    api.get(&format!("/tournaments/{id}")).await
}

/// `GET /tournaments/mis-torneos`: tournaments organized by the caller.
pub async fn mine(api: &ApiClient) -> Result<Vec<Tournament>, ApiError> {
    api.get("/tournaments/mis-torneos").await
}

/// `POST /tournaments`
pub async fn create(api: &ApiClient, tournament: &NewTournament) -> Result<Tournament, ApiError> {
    api.post("/tournaments", tournament).await
}

/// `POST /tournaments/{id}/flyer` (multipart)
pub async fn upload_flyer(api: &ApiClient, id: i64, file: Upload) -> Result<Tournament, ApiError> {
    api.upload(&format!("/tournaments/{id}/flyer"), file).await
}

/// `GET /tournaments/{id}/inscripciones`: organizer view.
pub async fn inscriptions(api: &ApiClient, id: i64) -> Result<Vec<Inscripcion>, ApiError> {
    api.get(&format!("/tournaments/{id}/inscripciones")).await
}

/// `GET /tournaments/{id}/cuentas-bancarias`: organizer accounts for transfers.
pub async fn bank_accounts(api: &ApiClient, id: i64) -> Result<Vec<BankAccount>, ApiError> {
    api.get(&format!("/tournaments/{id}/cuentas-bancarias")).await
}
