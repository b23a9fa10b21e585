//! Errors returned by every service call.
//!
//! There is no finer taxonomy than "transport failed" vs "server said no":
//! pages show [`ApiError::user_message`] inline or as a toast, and treat
//! [`ApiError::Unauthorized`] as "session is gone".

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("Tu sesión expiró, volvé a iniciar sesión")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Respuesta inesperada del servidor: {0}")]
    Decode(String),
    #[error("Archivo inválido: {0}")]
    InvalidUpload(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text suitable for showing to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Build from a non-2xx response body.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            return ApiError::Unauthorized;
        }
        let message = message_from_body(body).unwrap_or_else(|| fallback_message(status));
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Pull the human-readable message out of an error body.
///
/// Accepts `{"message": "..."}`, `{"message": ["...", "..."]}` (validation
/// errors, joined with "; ") and `{"error": "..."}`.
pub fn message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .into_iter()
        .filter_map(|key| value.get(key))
        .find_map(field_text)
}

fn field_text(field: &Value) -> Option<String> {
    let text = match field {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn fallback_message(status: StatusCode) -> String {
    match status.as_u16() {
        400 => "Datos inválidos".to_string(),
        403 => "No tenés permiso para realizar esta acción".to_string(),
        404 => "No encontrado".to_string(),
        409 => "Conflicto con el estado actual".to_string(),
        413 => "El archivo es demasiado grande".to_string(),
        500..=599 => "Error del servidor, intentá de nuevo más tarde".to_string(),
        code => format!("Error inesperado ({code})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_string_message() {
        assert_eq!(
            message_from_body(r#"{"statusCode":409,"message":"Ya estás inscripto en esta categoría"}"#),
            Some("Ya estás inscripto en esta categoría".to_string())
        );
    }

    #[test]
    fn joins_validation_array() {
        assert_eq!(
            message_from_body(r#"{"message":["documento must not be empty"," categoriaId must be a number "]}"#),
            Some("documento must not be empty; categoriaId must be a number".to_string())
        );
    }

    #[test]
    fn falls_back_to_error_field_and_rejects_garbage() {
        assert_eq!(
            message_from_body(r#"{"error":"Bad Request"}"#),
            Some("Bad Request".to_string())
        );
        assert_eq!(message_from_body("<html>oops</html>"), None);
        assert_eq!(message_from_body(r#"{"message":""}"#), None);
        assert_eq!(message_from_body(r#"{"message":42}"#), None);
    }

    #[test]
    fn empty_message_falls_through_to_error_field() {
        assert_eq!(
            message_from_body(r#"{"message":"","error":"Bad Request"}"#),
            Some("Bad Request".to_string())
        );
        assert_eq!(
            message_from_body(r#"{"message":[],"error":"Conflict"}"#),
            Some("Conflict".to_string())
        );
    }

    #[test]
    fn status_401_is_unauthorized() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, r#"{"message":"jwt expired"}"#);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn status_without_body_uses_generic_message() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "");
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "No encontrado");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
