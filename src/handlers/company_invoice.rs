use super::fetch_into;
use crate::api::{with_query, ApiClient, ApiResponse};
use crate::error::ClientError;
use crate::models::{CompanyInvoiceCreate, Period};
use crate::store::Store;
use crate::types::HttpMethod;

const PATH: &str = "/api/invoice/company";

/// Company invoice for one period (a single object, not a list)
#[derive(Clone)]
pub struct CompanyInvoiceHandler {
    client: ApiClient,
    store: Store,
}

impl CompanyInvoiceHandler {
    pub fn new(client: ApiClient, store: Store) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn init(&self, year: i32, month: u32) -> Result<(), ClientError> {
        if self.store.is_empty() {
            self.refresh(year, month).await?;
        }
        Ok(())
    }

    pub async fn refresh(&self, year: i32, month: u32) -> Result<(), ClientError> {
        let period = Period::new(year, month);
        let path = with_query(PATH, &period.query());
        fetch_into(&self.client, &self.store, HttpMethod::Get, &path, None).await
    }

    /// Settle the invoice for a period; the store then shows that period
    pub async fn create(&self, invoice: &CompanyInvoiceCreate) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .post(PATH, serde_json::to_value(invoice)?)
            .await?;
        if response.is(201) {
            self.refresh(invoice.year, invoice.month).await?;
        }
        Ok(response)
    }
}
