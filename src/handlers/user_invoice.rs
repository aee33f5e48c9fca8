use serde_json::json;

use super::fetch_into;
use crate::api::{with_query, ApiClient, ApiResponse};
use crate::error::ClientError;
use crate::models::UserPeriod;
use crate::store::Store;
use crate::types::HttpMethod;

const PATH: &str = "/api/invoice/user";

/// Invoice of one user for one period
#[derive(Clone)]
pub struct UserInvoiceHandler {
    client: ApiClient,
    store: Store,
}

impl UserInvoiceHandler {
    pub fn new(client: ApiClient, store: Store) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn init(&self, user_id: i64, year: i32, month: u32) -> Result<(), ClientError> {
        if self.store.is_empty() {
            self.refresh(user_id, year, month).await?;
        }
        Ok(())
    }

    pub async fn refresh(&self, user_id: i64, year: i32, month: u32) -> Result<(), ClientError> {
        let scope = UserPeriod::new(user_id, year, month);
        let path = with_query(PATH, &scope.query());
        fetch_into(&self.client, &self.store, HttpMethod::Get, &path, None).await
    }

    pub async fn create(&self, user_id: i64, year: i32, month: u32) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .post(PATH, json!({ "user_id": user_id, "year": year, "month": month }))
            .await?;
        if response.is(201) {
            self.refresh(user_id, year, month).await?;
        }
        Ok(response)
    }
}
