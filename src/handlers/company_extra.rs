use std::sync::Arc;

use serde_json::json;

use super::{fetch_into, CompanyInvoiceHandler, LastScope};
use crate::api::{with_query, ApiClient, ApiResponse};
use crate::error::ClientError;
use crate::models::Period;
use crate::notify::{Confirmation, Notifier};
use crate::store::Store;
use crate::types::HttpMethod;

const PATH: &str = "/api/invoice/company/extra";

/// Extra lines of the company invoice, scoped to a period
///
/// The company invoice embeds its extra lines, so successful mutations refresh
/// both stores for the period of the last init/refresh.
#[derive(Clone)]
pub struct CompanyExtraHandler {
    client: ApiClient,
    store: Store,
    invoices: CompanyInvoiceHandler,
    notifier: Arc<dyn Notifier>,
    last_period: LastScope<Period>,
}

impl CompanyExtraHandler {
    pub fn new(
        client: ApiClient,
        store: Store,
        invoices: CompanyInvoiceHandler,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            store,
            invoices,
            notifier,
            last_period: LastScope::new("company invoice extra"),
        }
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
        self.last_period.record(period);
        let path = with_query(PATH, &period.query());
        fetch_into(&self.client, &self.store, HttpMethod::Get, &path, None).await
    }

    async fn refresh_period(&self, period: Period) -> Result<(), ClientError> {
        futures::try_join!(
            self.refresh(period.year, period.month),
            self.invoices.refresh(period.year, period.month),
        )?;
        Ok(())
    }

    pub async fn create(&self, year: i32, month: u32, name: &str, price: i64) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .post(PATH, json!({ "year": year, "month": month, "name": name, "price": price }))
            .await?;
        if response.is(201) {
            self.refresh_period(Period::new(year, month)).await?;
        }
        Ok(response)
    }

    pub async fn update(&self, extra_id: i64, name: &str, price: i64) -> Result<ApiResponse, ClientError> {
        let period = self.last_period.require()?;
        let response = self
            .client
            .put(&format!("{}/{}", PATH, extra_id), json!({ "name": name, "price": price }))
            .await?;
        if response.is(200) {
            self.notifier.confirm(Confirmation::Updated);
            self.refresh_period(period).await?;
        }
        Ok(response)
    }

    pub async fn delete(&self, extra_id: i64) -> Result<ApiResponse, ClientError> {
        let period = self.last_period.require()?;
        let response = self.client.delete(&format!("{}/{}", PATH, extra_id)).await?;
        if response.is(200) {
            self.refresh_period(period).await?;
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mock_client, MockTransport, RecordingNotifier};

    const EXTRA_MARCH: &str = "/api/invoice/company/extra?year=2024&month=03";
    const INVOICE_MARCH: &str = "/api/invoice/company?year=2024&month=03";

    fn handler(mock: &Arc<MockTransport>, notifier: Arc<RecordingNotifier>) -> CompanyExtraHandler {
        let client = mock_client(mock);
        let invoices = CompanyInvoiceHandler::new(client.clone(), Store::singleton("company_invoice"));
        CompanyExtraHandler::new(client, Store::list("company_extra"), invoices, notifier)
    }

    #[tokio::test]
    async fn update_confirms_and_refreshes_last_period() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(HttpMethod::Get, EXTRA_MARCH, 200, json!([{"id": 5, "name": "rent", "price": 10}]));
        mock.respond(HttpMethod::Get, EXTRA_MARCH, 200, json!([{"id": 5, "name": "rent", "price": 20}]));
        mock.respond(HttpMethod::Get, INVOICE_MARCH, 200, json!({"result": {"extra": 20}}));
        mock.respond(HttpMethod::Put, "/api/invoice/company/extra/5", 200, json!({"success": true}));
        let notifier = Arc::new(RecordingNotifier::new());
        let extras = handler(&mock, notifier.clone());

        extras.init(2024, 3).await.unwrap();
        extras.update(5, "rent", 20).await.unwrap();

        assert_eq!(notifier.seen(), vec![Confirmation::Updated]);
        assert_eq!(extras.store().get(), json!([{"id": 5, "name": "rent", "price": 20}]));
        assert_eq!(mock.count(HttpMethod::Get, INVOICE_MARCH), 1);
        assert_eq!(
            mock.requests()[1].body,
            Some(json!({"name": "rent", "price": 20}))
        );
    }

    #[tokio::test]
    async fn mutating_before_init_is_a_scope_error() {
        let mock = Arc::new(MockTransport::new());
        let extras = handler(&mock, Arc::new(RecordingNotifier::new()));

        assert!(matches!(extras.delete(5).await, Err(ClientError::MissingScope(_))));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn delete_targets_the_extra_resource() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(HttpMethod::Get, EXTRA_MARCH, 200, json!([]));
        mock.respond(HttpMethod::Get, INVOICE_MARCH, 200, json!({}));
        mock.respond(HttpMethod::Delete, "/api/invoice/company/extra/5", 200, json!({"success": true}));
        let extras = handler(&mock, Arc::new(RecordingNotifier::new()));

        extras.refresh(2024, 3).await.unwrap();
        extras.delete(5).await.unwrap();

        assert_eq!(mock.count(HttpMethod::Delete, "/api/invoice/company/extra/5"), 1);
        assert_eq!(mock.count(HttpMethod::Get, EXTRA_MARCH), 2);
    }
}
