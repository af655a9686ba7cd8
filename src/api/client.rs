use std::sync::Arc;

use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::session::Session;

use super::error::ApiError;

/// JSON client for the remote API.
///
/// Attaches `Authorization: Bearer <token>` whenever the session holds a
/// token. Cloning shares the connection pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn Session>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Arc<dyn Session>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ApiError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/usuarios`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, self.request(Method::GET, path))
            .await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, path, self.request(Method::PATCH, path).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::DELETE, path, self.request(Method::DELETE, path))
            .await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        self.send(
            Method::POST,
            path,
            self.request(Method::POST, path).multipart(form),
        )
        .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.current_token() {
            Some(token) => builder.bearer_auth(token.expose()),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| {
            let err = ApiError::from_reqwest(&e);
            tracing::warn!(%method, path, error = %err, "request failed");
            err
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_reqwest(&e))?;

        tracing::debug!(%method, path, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(ApiError::from_status_body(status.as_u16(), &body));
        }

        let value: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| ApiError::transport(format!("unreadable response: {}", e)))?;

        // Some endpoints answer 200 with `{"ok": false, "msg": ...}`.
        if value.get("ok") == Some(&serde_json::Value::Bool(false)) {
            return Err(ApiError::from_status_body(status.as_u16(), &body));
        }

        serde_json::from_value(value)
            .map_err(|e| ApiError::transport(format!("unexpected response shape: {}", e)))
    }
}
