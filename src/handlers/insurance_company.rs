use serde_json::json;

use super::fetch_into;
use crate::api::{ApiClient, ApiResponse};
use crate::error::ClientError;
use crate::store::Store;
use crate::types::HttpMethod;

const PATH: &str = "/api/transaction/insurancecompany";

/// Insurance company master data
#[derive(Clone)]
pub struct InsuranceCompanyHandler {
    client: ApiClient,
    store: Store,
}

impl InsuranceCompanyHandler {
    pub fn new(client: ApiClient, store: Store) -> Self {
        Self { client, store }
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

    pub async fn create(&self, name: &str) -> Result<ApiResponse, ClientError> {
        let response = self.client.post(PATH, json!({ "name": name })).await?;
        if response.is(201) {
            self.refresh().await?;
        }
        Ok(response)
    }

    pub async fn update(&self, id: i64, name: &str) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .put(&format!("{}/{}", PATH, id), json!({ "name": name }))
            .await?;
        if response.is(200) {
            self.refresh().await?;
        }
        Ok(response)
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse, ClientError> {
        let response = self.client.delete(&format!("{}/{}", PATH, id)).await?;
        if response.is(200) {
            self.refresh().await?;
        }
        Ok(response)
    }
}
