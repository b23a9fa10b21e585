//! `/auth`: login, registration and the current user.

use serde::{Deserialize, Serialize};
use store::models::User;
use store::Session;

use crate::{ApiClient, ApiError};

#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub documento: String,
    pub telefono: String,
    pub ciudad: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    access_token: String,
    user: User,
}

impl From<AuthResponse> for Session {
    fn from(r: AuthResponse) -> Self {
        Session::new(r.access_token, r.user)
    }
}

/// `POST /auth/login`
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<Session, ApiError> {
    let response: AuthResponse = api.post("/auth/login", credentials).await?;
    tracing::info!(user_id = response.user.id, "logged in");
    Ok(response.into())
}

/// `POST /auth/register`
pub async fn register(api: &ApiClient, registration: &Registration) -> Result<Session, ApiError> {
    let response: AuthResponse = api.post("/auth/register", registration).await?;
    tracing::info!(user_id = response.user.id, "registered");
    Ok(response.into())
}

/// `GET /auth/me`: revalidates a cached token.
pub async fn me(api: &ApiClient) -> Result<User, ApiError> {
    api.get("/auth/me").await
}
