//! `/circuitos`

use serde::Serialize;
use store::models::{Circuito, CircuitoStanding};

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddTournamentBody {
    tournament_id: i64,
}

/// `GET /circuitos`
pub async fn list(api: &ApiClient) -> Result<Vec<Circuito>, ApiError> {
    api.get("/circuitos").await
}

/// `GET /circuitos/{id}`
pub async fn get(api: &ApiClient, id: i64) -> Result<Circuito, ApiError> {
    api.get(&format!("/circuitos/{id}")).await
}

/// `GET /circuitos/{id}/clasificacion/{categoriaId}`
pub async fn standings(
    api: &ApiClient,
    id: i64,
    categoria_id: i64,
) -> Result<Vec<CircuitoStanding>, ApiError> {
    api.get(&format!("/circuitos/{id}/clasificacion/{categoria_id}")).await
}

/// `PUT /circuitos/{id}/agregar-torneo`
pub async fn add_tournament(api: &ApiClient, id: i64, tournament_id: i64) -> Result<Circuito, ApiError> {
    api.put(
        &format!("/circuitos/{id}/agregar-torneo"),
        &AddTournamentBody { tournament_id },
    )
    .await
}
