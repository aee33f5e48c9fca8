use serde_json::json;

use super::{fetch_into, UserInvoiceHandler};
use crate::api::{with_query, ApiClient, ApiResponse};
use crate::error::ClientError;
use crate::models::{ExtraLine, UserPeriod};
use crate::store::Store;
use crate::types::HttpMethod;

const PATH: &str = "/api/invoice/user/extra";

/// Extra lines of a user invoice, scoped to (user, period)
///
/// Every successful mutation refreshes the extra list and the parent user
/// invoice for the same scope.
#[derive(Clone)]
pub struct UserExtraHandler {
    client: ApiClient,
    store: Store,
    invoices: UserInvoiceHandler,
}

impl UserExtraHandler {
    pub fn new(client: ApiClient, store: Store, invoices: UserInvoiceHandler) -> Self {
        Self { client, store, invoices }
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
        let path = with_query(PATH, &UserPeriod::new(user_id, year, month).query());
        fetch_into(&self.client, &self.store, HttpMethod::Get, &path, None).await
    }

    async fn refresh_with_invoice(&self, user_id: i64, year: i32, month: u32) -> Result<(), ClientError> {
        futures::try_join!(
            self.refresh(user_id, year, month),
            self.invoices.refresh(user_id, year, month),
        )?;
        Ok(())
    }

    pub async fn create(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
        extra_name: &str,
        price: i64,
    ) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .post(
                PATH,
                json!({ "user_id": user_id, "year": year, "month": month, "name": extra_name, "price": price }),
            )
            .await?;
        if response.is(201) {
            self.refresh_with_invoice(user_id, year, month).await?;
        }
        Ok(response)
    }

    pub async fn update(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
        extra: &ExtraLine,
    ) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .put(
                &format!("{}/{}", PATH, extra.id),
                json!({ "name": extra.name, "price": extra.price }),
            )
            .await?;
        if response.is(200) {
            self.refresh_with_invoice(user_id, year, month).await?;
        }
        Ok(response)
    }

    pub async fn delete(&self, user_id: i64, year: i32, month: u32, extra_id: i64) -> Result<ApiResponse, ClientError> {
        let response = self.client.delete(&format!("{}/{}", PATH, extra_id)).await?;
        if response.is(200) {
            self.refresh_with_invoice(user_id, year, month).await?;
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{envelope, mock_client, MockTransport};
    use std::sync::Arc;

    const EXTRA_SCOPE: &str = "/api/invoice/user/extra?user_id=3&year=2024&month=05";
    const INVOICE_SCOPE: &str = "/api/invoice/user?user_id=3&year=2024&month=05";

    fn handlers(mock: &Arc<MockTransport>) -> (UserExtraHandler, UserInvoiceHandler) {
        let client = mock_client(mock);
        let invoices = UserInvoiceHandler::new(client.clone(), Store::singleton("user_invoice"));
        let extras = UserExtraHandler::new(client, Store::list("user_extra"), invoices.clone());
        (extras, invoices)
    }

    #[tokio::test]
    async fn create_triggers_exactly_two_refreshes_for_the_same_scope() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(HttpMethod::Post, PATH, 201, json!({"success": true}));
        mock.respond(HttpMethod::Get, EXTRA_SCOPE, 200, envelope(json!([{"id": 1, "name": "bonus", "price": 3000}])));
        mock.respond(HttpMethod::Get, INVOICE_SCOPE, 200, json!({"result": {"extra_total": 3000}}));
        let (extras, invoices) = handlers(&mock);

        let response = extras.create(3, 2024, 5, "bonus", 3000).await.unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(mock.requests().len(), 3);
        assert_eq!(mock.count(HttpMethod::Get, EXTRA_SCOPE), 1);
        assert_eq!(mock.count(HttpMethod::Get, INVOICE_SCOPE), 1);
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({"user_id": 3, "year": 2024, "month": 5, "name": "bonus", "price": 3000}))
        );
        assert_eq!(extras.store().get(), envelope(json!([{"id": 1, "name": "bonus", "price": 3000}])));
        assert_eq!(invoices.store().get(), json!({"result": {"extra_total": 3000}}));
    }

    #[tokio::test]
    async fn update_sends_name_and_price_only() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(HttpMethod::Put, "/api/invoice/user/extra/1", 200, json!({"success": true}));
        mock.respond(HttpMethod::Get, EXTRA_SCOPE, 200, envelope(json!([])));
        mock.respond(HttpMethod::Get, INVOICE_SCOPE, 200, json!({}));
        let (extras, _) = handlers(&mock);

        let extra = ExtraLine { id: 1, name: "fuel".to_string(), price: 100 };
        extras.update(3, 2024, 5, &extra).await.unwrap();

        assert_eq!(mock.requests()[0].body, Some(json!({"name": "fuel", "price": 100})));
        assert_eq!(mock.requests().len(), 3);
    }

    #[tokio::test]
    async fn settled_invoice_rejects_delete_without_refresh() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(
            HttpMethod::Delete,
            "/api/invoice/user/extra/1",
            400,
            json!({"success": false, "message": "settled"}),
        );
        let (extras, _) = handlers(&mock);

        let response = extras.delete(3, 2024, 5, 1).await.unwrap();
        assert_eq!(response.status, 400);
        assert_eq!(mock.requests().len(), 1);
    }
}
