//! `/suscripciones`: premium plans. Payment itself happens on the gateway.

use serde::{Deserialize, Serialize};
use store::models::{SubscriptionPlan, SubscriptionStatus};

use crate::{ApiClient, ApiError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeBody {
    plan_id: i64,
}

/// Where to send the user to pay.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    pub checkout_url: String,
}

/// `GET /suscripciones/planes`
pub async fn plans(api: &ApiClient) -> Result<Vec<SubscriptionPlan>, ApiError> {
    api.get("/suscripciones/planes").await
}

/// `GET /suscripciones/mi-suscripcion`
pub async fn status(api: &ApiClient) -> Result<SubscriptionStatus, ApiError> {
    api.get("/suscripciones/mi-suscripcion").await
}

/// `POST /suscripciones`
pub async fn subscribe(api: &ApiClient, plan_id: i64) -> Result<Checkout, ApiError> {
    api.post("/suscripciones", &SubscribeBody { plan_id }).await
}
