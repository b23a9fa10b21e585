//! `/inscripciones`

use serde::Serialize;
use store::models::{Inscripcion, NewInscripcion, PaymentMethod};

use crate::{ApiClient, ApiError, Upload};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentMethodBody {
    metodo_pago: PaymentMethod,
}

/// `POST /inscripciones`
pub async fn create(api: &ApiClient, request: &NewInscripcion) -> Result<Inscripcion, ApiError> {
    let created: Inscripcion = api.post("/inscripciones", request).await?;
    tracing::info!(inscripcion_id = created.id, tournament_id = request.tournament_id, "inscription created");
    Ok(created)
}

/// `GET /inscripciones/mis-inscripciones`
pub async fn mine(api: &ApiClient) -> Result<Vec<Inscripcion>, ApiError> {
    api.get("/inscripciones/mis-inscripciones").await
}

/// `PATCH /inscripciones/{id}/metodo-pago`
pub async fn set_payment_method(
    api: &ApiClient,
    id: i64,
    method: PaymentMethod,
) -> Result<Inscripcion, ApiError> {
    api.patch(
        &format!("/inscripciones/{id}/metodo-pago"),
        &PaymentMethodBody { metodo_pago: method },
    )
    .await
}

/// `POST /inscripciones/{id}/comprobante` (multipart)
pub async fn upload_proof(api: &ApiClient, id: i64, file: Upload) -> Result<Inscripcion, ApiError> {
    api.upload(&format!("/inscripciones/{id}/comprobante"), file).await
}

/// `PATCH /inscripciones/{id}/confirmar`: organizer confirms a payment.
pub async fn confirm(api: &ApiClient, id: i64) -> Result<Inscripcion, ApiError> {
    api.patch(&format!("/inscripciones/{id}/confirmar"), &serde_json::json!({})).await
}

/// `DELETE /inscripciones/{id}`
pub async fn cancel(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/inscripciones/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_body_matches_backend_shape() {
        let body = serde_json::to_value(PaymentMethodBody {
            metodo_pago: PaymentMethod::Transferencia,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "metodoPago": "TRANSFERENCIA" }));
    }
}
