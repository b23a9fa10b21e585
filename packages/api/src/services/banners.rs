//! `/banners`: creatives per zone plus impression/click tracking.

use serde::Serialize;
use store::models::{Banner, BannerZone};

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ZoneQuery {
    zona: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    torneo_id: Option<i64>,
}

/// `GET /banners/activos?zona=..[&torneoId=..]`
pub async fn active(
    api: &ApiClient,
    zone: BannerZone,
    tournament_id: Option<i64>,
) -> Result<Vec<Banner>, ApiError> {
    api.get_query(
        "/banners/activos",
        &ZoneQuery {
            zona: zone.as_query(),
            torneo_id: tournament_id,
        },
    )
    .await
}

/// `POST /banners/{id}/impresion`
pub async fn record_impression(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.post_empty(&format!("/banners/{id}/impresion")).await
}

/// `POST /banners/{id}/click`
pub async fn record_click(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.post_empty(&format!("/banners/{id}/click")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tournament_id_only_sent_when_present() {
        let home = serde_json::to_value(ZoneQuery {
            zona: BannerZone::HomeTop.as_query(),
            torneo_id: None,
        })
        .unwrap();
        assert_eq!(home, serde_json::json!({ "zona": "HOME_TOP" }));

        let detail = serde_json::to_value(ZoneQuery {
            zona: BannerZone::TournamentDetail.as_query(),
            torneo_id: Some(12),
        })
        .unwrap();
        assert_eq!(
            detail,
            serde_json::json!({ "zona": "TOURNAMENT_DETAIL", "torneoId": 12 })
        );
    }
}
