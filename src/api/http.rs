use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::{ApiRequest, ApiResponse, Transport};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// reqwest backed transport against a fixed base URL
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            timeout,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(&config.api.base_url, config.request_timeout(), &config.api.user_agent)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = self.base_url.join(&request.path)?;

        let mut builder = self
            .client
            .request(request.method.into(), url.clone())
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(self.timeout)
            } else {
                ClientError::from(e)
            }
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(self.timeout)
            } else {
                ClientError::from(e)
            }
        })?;

        Ok(ApiResponse::new(status, parse_body(&text, url.path())))
    }
}

/// JSON when possible, the raw text otherwise, null for an empty body
fn parse_body(text: &str, path: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(%path, error = %e, "response body is not JSON, keeping raw text");
            Value::String(text.to_string())
        }
    }
}
