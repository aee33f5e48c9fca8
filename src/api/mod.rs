//! HTTP client wrapper
//!
//! Every handler talks to the backend through [`ApiClient::request`]: it sets
//! the JSON headers, attaches the bearer token selected by [`AuthMode`] and
//! normalizes the reply into an [`ApiResponse`] `{status, data}` pair.

pub mod http;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;
use crate::storage::KeyValueStore;
use crate::types::{AuthMode, HttpMethod};

pub use http::HttpTransport;

/// A fully prepared request, handed to the transport
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path plus query string, always starting with `/`
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

/// Status code plus parsed JSON body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

impl ApiResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    pub fn is(&self, status: u16) -> bool {
        self.status == status
    }

    /// Server message from the `{success, message, result}` envelope
    pub fn message(&self) -> Option<&str> {
        self.data.get("message").and_then(Value::as_str)
    }
}

/// Issues one request; no retry, no backoff
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<dyn KeyValueStore>) -> Self {
        Self { transport, tokens }
    }

    /// Persisted storage holding `access_token` / `refresh_token`
    pub fn tokens(&self) -> &Arc<dyn KeyValueStore> {
        &self.tokens
    }

    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        mut headers: HeaderMap,
        body: Option<Value>,
        auth: AuthMode,
    ) -> Result<ApiResponse, ClientError> {
        let path = normalize_path(path);

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = auth.storage_key() {
            match self.tokens.get(key)? {
                Some(token) => {
                    let value = HeaderValue::from_str(&format!("Bearer {}", token))
                        .map_err(|e| ClientError::MalformedToken(e.to_string()))?;
                    headers.insert(AUTHORIZATION, value);
                }
                None => {
                    tracing::warn!(%method, %path, "no {} stored, sending request without Authorization", key);
                }
            }
        }

        let body = if method.allows_body() { body } else { None };

        tracing::debug!(%method, %path, auth = ?auth, has_body = body.is_some(), "api request");

        let response = self
            .transport
            .send(ApiRequest {
                method,
                path: path.clone(),
                headers,
                body,
            })
            .await?;

        tracing::debug!(%method, %path, status = response.status, "api response");
        Ok(response)
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, ClientError> {
        self.request(HttpMethod::Get, path, HeaderMap::new(), None, AuthMode::Access)
            .await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, ClientError> {
        self.request(HttpMethod::Post, path, HeaderMap::new(), Some(body), AuthMode::Access)
            .await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<ApiResponse, ClientError> {
        self.request(HttpMethod::Put, path, HeaderMap::new(), Some(body), AuthMode::Access)
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ClientError> {
        self.request(HttpMethod::Delete, path, HeaderMap::new(), None, AuthMode::Access)
            .await
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Build `path?k=v&...` with form encoding
pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    format!("{}?{}", path, query)
}
