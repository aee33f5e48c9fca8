use super::{fetch_into, LastScope};
use crate::api::{ApiClient, ApiResponse};
use crate::error::ClientError;
use crate::models::{LookupOptions, TransactionCreate, TransactionUpdate};
use crate::store::Store;
use crate::types::HttpMethod;

const PATH: &str = "/api/transaction";
const TABLE_PATH: &str = "/api/transaction/table";

/// Filtered transaction listing, `POST /api/transaction/table`
///
/// The lookup options of the last init/refresh are retained and replayed on
/// every refresh triggered by a mutation.
#[derive(Clone)]
pub struct TransactionHandler {
    client: ApiClient,
    store: Store,
    last_options: LastScope<LookupOptions>,
}

impl TransactionHandler {
    pub fn new(client: ApiClient, store: Store) -> Self {
        Self {
            client,
            store,
            last_options: LastScope::new("transaction"),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn last_options(&self) -> Option<LookupOptions> {
        self.last_options.get()
    }

    /// Options are remembered even when the store is already populated
    pub async fn init(&self, options: &LookupOptions) -> Result<(), ClientError> {
        self.last_options.record(options.clone());
        if self.store.is_empty() {
            self.fetch(options).await?;
        }
        Ok(())
    }

    pub async fn refresh(&self, options: &LookupOptions) -> Result<(), ClientError> {
        self.last_options.record(options.clone());
        self.fetch(options).await
    }

    async fn fetch(&self, options: &LookupOptions) -> Result<(), ClientError> {
        let body = serde_json::to_value(options.sanitized())?;
        fetch_into(&self.client, &self.store, HttpMethod::Post, TABLE_PATH, Some(body)).await
    }

    async fn refresh_last(&self) -> Result<(), ClientError> {
        let options = self.last_options.get().unwrap_or_default();
        self.fetch(&options).await
    }

    pub async fn create(&self, transaction: &TransactionCreate) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .post(PATH, serde_json::to_value(transaction)?)
            .await?;
        if response.is(201) {
            self.refresh_last().await?;
        }
        Ok(response)
    }

    pub async fn update(&self, id: i64, transaction: &TransactionUpdate) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .put(&format!("{}/{}", PATH, id), serde_json::to_value(transaction)?)
            .await?;
        if response.is(200) {
            self.refresh_last().await?;
        }
        Ok(response)
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse, ClientError> {
        let response = self.client.delete(&format!("{}/{}", PATH, id)).await?;
        if response.is(200) {
            self.refresh_last().await?;
        }
        Ok(response)
    }
}
