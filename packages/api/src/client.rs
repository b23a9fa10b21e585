//! # HTTP client wrapper
//!
//! [`ApiClient`] is the single leaf every service goes through. It joins
//! paths onto the configured base URL, attaches `Authorization: Bearer`
//! when a token is present, decodes JSON into typed models and turns
//! non-2xx responses into [`ApiError`] carrying the server's message.
//!
//! The client is cheap to clone (`reqwest::Client` is reference counted);
//! the UI rebuilds one with [`ApiClient::with_token`] whenever the session
//! changes instead of mutating a shared instance.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::ClientConfig;

use crate::error::ApiError;

/// A file to send as one multipart field.
#[derive(Clone, Debug)]
pub struct Upload {
    pub field: &'static str,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Same connection pool and base URL, different credentials.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.request(Method::GET, path).send().await?).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        decode(self.request(Method::GET, path).query(query).send().await?).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        decode(self.request(Method::POST, path).json(body).send().await?).await
    }

    /// POST with no body whose response content is irrelevant.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        expect_success(self.request(Method::POST, path).send().await?).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        decode(self.request(Method::PUT, path).json(body).send().await?).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        decode(self.request(Method::PATCH, path).json(body).send().await?).await
    }

    /// PATCH whose response content is irrelevant.
    pub async fn patch_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        expect_success(self.request(Method::PATCH, path).json(body).send().await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        expect_success(self.request(Method::DELETE, path).send().await?).await
    }

    /// Multipart POST with one file field.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        upload: Upload,
    ) -> Result<T, ApiError> {
        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime)
            .map_err(|e| ApiError::InvalidUpload(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(upload.field, part);
        decode(self.request(Method::POST, path).multipart(form).send().await?).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    Ok(response.json::<T>().await?)
}

async fn expect_success(response: Response) -> Result<(), ApiError> {
    check(response).await.map(|_| ())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    tracing::warn!(status = status.as_u16(), error = %err, "api request failed");
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slashes() {
        let config = ClientConfig::default().with_base_url("http://localhost:3000/");
        let api = ApiClient::new(&config);
        assert_eq!(api.url("/auth/login"), "http://localhost:3000/auth/login");
        assert_eq!(api.url("tournaments"), "http://localhost:3000/tournaments");
    }

    #[test]
    fn with_token_keeps_base_url() {
        let api = ApiClient::new(&ClientConfig::default());
        let authed = api.with_token(Some("abc".into()));
        assert_eq!(authed.token(), Some("abc"));
        assert_eq!(authed.url("x"), api.url("x"));
        assert_ne!(api, authed);
        assert_eq!(authed.with_token(None), api);
    }
}
