//! `/rankings`

use store::models::RankingEntry;

use crate::{ApiClient, ApiError};

/// `GET /rankings/categoria/{categoriaId}`
pub async fn by_category(api: &ApiClient, categoria_id: i64) -> Result<Vec<RankingEntry>, ApiError> {
    api.get(&format!("/rankings/categoria/{categoria_id}")).await
}
