use reqwest::header::HeaderMap;
use serde_json::json;

use super::{decode_claims, Claims};
use crate::api::{ApiClient, ApiResponse};
use crate::error::ClientError;
use crate::models::UserRegister;
use crate::storage::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::types::{AuthMode, HttpMethod};

/// Login, token refresh and logout against `/api/user`
#[derive(Clone)]
pub struct SessionHandler {
    client: ApiClient,
}

impl SessionHandler {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/user/login`; tokens are persisted on 200
    pub async fn login(&self, email: &str, password: &str) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .request(
                HttpMethod::Post,
                "/api/user/login",
                HeaderMap::new(),
                Some(json!({ "email": email, "password": password })),
                AuthMode::None,
            )
            .await?;

        if response.is(200) {
            let tokens = self.client.tokens();
            if let Some(access) = response.data.get("access_token").and_then(|v| v.as_str()) {
                tokens.set(ACCESS_TOKEN_KEY, access)?;
            }
            if let Some(refresh) = response.data.get("refresh_token").and_then(|v| v.as_str()) {
                tokens.set(REFRESH_TOKEN_KEY, refresh)?;
            }
            tracing::info!(%email, "logged in");
        }

        Ok(response)
    }

    /// `POST /api/user` without credentials; 201 leaves a registration pending approval
    pub async fn register(&self, registration: &UserRegister) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .request(
                HttpMethod::Post,
                "/api/user",
                HeaderMap::new(),
                Some(serde_json::to_value(registration)?),
                AuthMode::None,
            )
            .await?;

        if response.is(201) {
            tracing::info!(email = %registration.email, "registration submitted");
        }
        Ok(response)
    }

    /// `GET /api/user/token/refresh` with the refresh token; new access token persisted on 200
    pub async fn refresh_access_token(&self) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .request(
                HttpMethod::Get,
                "/api/user/token/refresh",
                HeaderMap::new(),
                None,
                AuthMode::Refresh,
            )
            .await?;

        if response.is(200) {
            if let Some(access) = response.data.get("access_token").and_then(|v| v.as_str()) {
                self.client.tokens().set(ACCESS_TOKEN_KEY, access)?;
                tracing::info!("access token refreshed");
            }
        }

        Ok(response)
    }

    pub fn logout(&self) -> Result<(), ClientError> {
        let tokens = self.client.tokens();
        tokens.remove(ACCESS_TOKEN_KEY)?;
        tokens.remove(REFRESH_TOKEN_KEY)?;
        Ok(())
    }

    pub fn access_token(&self) -> Result<Option<String>, ClientError> {
        self.client.tokens().get(ACCESS_TOKEN_KEY)
    }

    /// Claims of the stored access token, `None` when logged out
    pub fn current_claims(&self) -> Result<Option<Claims>, ClientError> {
        match self.access_token()? {
            Some(token) => Ok(Some(decode_claims(&token)?)),
            None => Ok(None),
        }
    }

    pub fn current_user_id(&self) -> Result<Option<i64>, ClientError> {
        match self.current_claims()? {
            Some(claims) => Ok(Some(claims.subject()?)),
            None => Ok(None),
        }
    }
}
