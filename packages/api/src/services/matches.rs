//! `/matches`: brackets are generated server-side; this only reads them,
//! triggers the draw and loads results.

use store::models::{Match, MatchResult};

use crate::{ApiClient, ApiError};

/// `GET /matches/torneo/{tournamentId}`
pub async fn by_tournament(api: &ApiClient, tournament_id: i64) -> Result<Vec<Match>, ApiError> {
    api.get(&format!("/matches/torneo/{tournament_id}")).await
}

/// `POST /matches/sortear/{tournamentId}/{categoriaId}`: server-side draw.
pub async fn draw_category(
    api: &ApiClient,
    tournament_id: i64,
    categoria_id: i64,
) -> Result<Vec<Match>, ApiError> {
    let matches: Vec<Match> = api
        .post(
            &format!("/matches/sortear/{tournament_id}/{categoria_id}"),
            &serde_json::json!({}),
        )
        .await?;
    tracing::info!(tournament_id, categoria_id, count = matches.len(), "draw generated");
    Ok(matches)
}

/// `PATCH /matches/{id}/resultado`
pub async fn set_result(api: &ApiClient, id: i64, result: &MatchResult) -> Result<Match, ApiError> {
    api.patch(&format!("/matches/{id}/resultado"), result).await
}
