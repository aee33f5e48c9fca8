use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::fetch_into;
use crate::api::{with_query, ApiClient};
use crate::error::ClientError;
use crate::models::Period;
use crate::store::Store;
use crate::types::HttpMethod;

/// Monthly totals under `/api/invoice/monthly/*`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    CancelFee,
    Revenue,
    PlateFee,
    EmployeeSalary,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::CancelFee,
        ReportKind::Revenue,
        ReportKind::PlateFee,
        ReportKind::EmployeeSalary,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ReportKind::CancelFee => "/api/invoice/monthly/cancel_fee",
            ReportKind::Revenue => "/api/invoice/monthly/revenue",
            ReportKind::PlateFee => "/api/invoice/monthly/plate_fee",
            ReportKind::EmployeeSalary => "/api/invoice/monthly/employee_salary",
        }
    }

    fn store_name(&self) -> &'static str {
        match self {
            ReportKind::CancelFee => "monthly_cancel_fee",
            ReportKind::Revenue => "monthly_revenue",
            ReportKind::PlateFee => "monthly_plate_fee",
            ReportKind::EmployeeSalary => "monthly_employee_salary",
        }
    }
}

/// Read-only monthly reports, one singleton store per kind
#[derive(Clone)]
pub struct ReportHandler {
    client: ApiClient,
    stores: Arc<HashMap<ReportKind, Store>>,
}

impl ReportHandler {
    pub fn new(client: ApiClient) -> Self {
        let stores = ReportKind::ALL
            .iter()
            .map(|kind| (*kind, Store::singleton(kind.store_name())))
            .collect();
        Self {
            client,
            stores: Arc::new(stores),
        }
    }

    pub fn store(&self, kind: ReportKind) -> &Store {
        // Every kind gets a store in `new`
        &self.stores[&kind]
    }

    pub async fn init(&self, kind: ReportKind, year: i32, month: u32) -> Result<(), ClientError> {
        if self.store(kind).is_empty() {
            self.refresh(kind, year, month).await?;
        }
        Ok(())
    }

    pub async fn refresh(&self, kind: ReportKind, year: i32, month: u32) -> Result<(), ClientError> {
        let path = with_query(kind.path(), &Period::new(year, month).query());
        fetch_into(&self.client, self.store(kind), HttpMethod::Get, &path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mock_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn each_kind_fills_its_own_store() {
        let mock = Arc::new(MockTransport::new());
        mock.respond(
            HttpMethod::Get,
            "/api/invoice/monthly/cancel_fee?year=2024&month=01",
            200,
            json!({"success": true, "result": {"cancel_fee": 12000}}),
        );
        let reports = ReportHandler::new(mock_client(&mock));

        reports.init(ReportKind::CancelFee, 2024, 1).await.unwrap();
        reports.init(ReportKind::CancelFee, 2024, 1).await.unwrap();

        assert_eq!(reports.store(ReportKind::CancelFee).get()["result"]["cancel_fee"], 12000);
        assert!(reports.store(ReportKind::Revenue).is_empty());
        assert_eq!(mock.requests().len(), 1);
    }
}
