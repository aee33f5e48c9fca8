use std::sync::Arc;

use serde_json::json;

use super::fetch_into;
use crate::api::{ApiClient, ApiResponse};
use crate::error::ClientError;
use crate::models::UserUpdate;
use crate::notify::{Confirmation, Notifier};
use crate::store::Store;
use crate::types::HttpMethod;

const PATH: &str = "/api/user";

/// Employee roster, `GET /api/user`
#[derive(Clone)]
pub struct EmployeeHandler {
    client: ApiClient,
    store: Store,
    notifier: Arc<dyn Notifier>,
}

impl EmployeeHandler {
    pub fn new(client: ApiClient, store: Store, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, store, notifier }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn init(&self) -> Result<(), ClientError> {
        if self.store.is_empty() {
            self.refresh().await?;
        }
        Ok(())
    }

    pub async fn refresh(&self) -> Result<(), ClientError> {
        fetch_into(&self.client, &self.store, HttpMethod::Get, PATH, None).await
    }

    /// `PUT /api/user/{id}` without changes; confirmed as a removal
    pub async fn put(&self, target_id: i64) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .put(&format!("{}/{}", PATH, target_id), json!({}))
            .await?;
        if response.is(200) {
            self.notifier.confirm(Confirmation::Deleted);
            self.refresh().await?;
        }
        Ok(response)
    }

    pub async fn delete(&self, user_id: i64) -> Result<ApiResponse, ClientError> {
        let response = self.client.delete(&format!("{}/{}", PATH, user_id)).await?;
        if response.is(200) {
            self.refresh().await?;
        }
        Ok(response)
    }

    /// Approve a pending registration with its role, fees and permissions
    pub async fn accept(&self, new_user_id: i64, info: &UserUpdate) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .put(&format!("{}/{}", PATH, new_user_id), serde_json::to_value(info)?)
            .await?;
        if response.is(200) {
            self.refresh().await?;
        }
        Ok(response)
    }

    /// Turn down a pending registration
    pub async fn reject(&self, target_id: i64) -> Result<ApiResponse, ClientError> {
        let response = self.client.delete(&format!("{}/{}", PATH, target_id)).await?;
        if response.is(200) {
            self.notifier.confirm(Confirmation::Deleted);
            self.refresh().await?;
        }
        Ok(response)
    }
}
