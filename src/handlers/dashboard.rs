use std::collections::HashMap;
use std::sync::Arc;

use super::fetch_into;
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::store::Store;
use crate::types::HttpMethod;

const PATH: &str = "/api/dashboard";

/// Read-only figures under `/api/dashboard/*`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardMetric {
    CurrentMonthRevenue,
    CurrentDayRevenue,
    CurrentMonthTransactionCount,
    CurrentDayTransactionCount,
    /// Revenue per month for the last `months` months, current month included
    MonthlyRevenue { months: u32 },
    MonthlyMemberRevenue,
    CurrentMonthMemberRevenueRate,
    CurrentMonthInvoiceCompanyRate,
}

const STORE_NAMES: [&str; 8] = [
    "dashboard_current_month_revenue",
    "dashboard_current_day_revenue",
    "dashboard_current_month_transaction_count",
    "dashboard_current_day_transaction_count",
    "dashboard_monthly_revenue",
    "dashboard_monthly_member_revenue",
    "dashboard_current_month_member_revenue_rate",
    "dashboard_current_month_invoice_company_rate",
];

impl DashboardMetric {
    /// Every metric, with `months` for the monthly revenue chart
    pub fn all(months: u32) -> [DashboardMetric; 8] {
        [
            DashboardMetric::CurrentMonthRevenue,
            DashboardMetric::CurrentDayRevenue,
            DashboardMetric::CurrentMonthTransactionCount,
            DashboardMetric::CurrentDayTransactionCount,
            DashboardMetric::MonthlyRevenue { months },
            DashboardMetric::MonthlyMemberRevenue,
            DashboardMetric::CurrentMonthMemberRevenueRate,
            DashboardMetric::CurrentMonthInvoiceCompanyRate,
        ]
    }

    pub fn path(&self) -> String {
        match self {
            DashboardMetric::CurrentMonthRevenue => format!("{}/current-month-revenue", PATH),
            DashboardMetric::CurrentDayRevenue => format!("{}/current-day-revenue", PATH),
            DashboardMetric::CurrentMonthTransactionCount => format!("{}/current-month-transaction-count", PATH),
            DashboardMetric::CurrentDayTransactionCount => format!("{}/current-day-transaction-count", PATH),
            DashboardMetric::MonthlyRevenue { months } => format!("{}/monthly-revenue/{}", PATH, months),
            DashboardMetric::MonthlyMemberRevenue => format!("{}/monthly-member-revenue", PATH),
            DashboardMetric::CurrentMonthMemberRevenueRate => format!("{}/current-month-member-revenue-rate", PATH),
            DashboardMetric::CurrentMonthInvoiceCompanyRate => format!("{}/current-month-invoice-company-rate", PATH),
        }
    }

    pub fn store_name(&self) -> &'static str {
        let index = match self {
            DashboardMetric::CurrentMonthRevenue => 0,
            DashboardMetric::CurrentDayRevenue => 1,
            DashboardMetric::CurrentMonthTransactionCount => 2,
            DashboardMetric::CurrentDayTransactionCount => 3,
            DashboardMetric::MonthlyRevenue { .. } => 4,
            DashboardMetric::MonthlyMemberRevenue => 5,
            DashboardMetric::CurrentMonthMemberRevenueRate => 6,
            DashboardMetric::CurrentMonthInvoiceCompanyRate => 7,
        };
        STORE_NAMES[index]
    }
}

/// Dashboard figures, one singleton store per metric
///
/// The monthly revenue store holds whichever window was fetched last.
#[derive(Clone)]
pub struct DashboardHandler {
    client: ApiClient,
    stores: Arc<HashMap<&'static str, Store>>,
}

impl DashboardHandler {
    pub fn new(client: ApiClient) -> Self {
        let stores = STORE_NAMES
            .iter()
            .map(|name| (*name, Store::singleton(*name)))
            .collect();
        Self {
            client,
            stores: Arc::new(stores),
        }
    }

    pub fn store(&self, metric: DashboardMetric) -> &Store {
        // Every metric's store is created in `new`
        &self.stores[metric.store_name()]
    }

    pub async fn init(&self, metric: DashboardMetric) -> Result<(), ClientError> {
        if self.store(metric).is_empty() {
            self.refresh(metric).await?;
        }
        Ok(())
    }

    pub async fn refresh(&self, metric: DashboardMetric) -> Result<(), ClientError> {
        fetch_into(&self.client, self.store(metric), HttpMethod::Get, &metric.path(), None).await
    }

    /// Refresh every metric concurrently; the first failure is returned
    pub async fn refresh_all(&self, months: u32) -> Result<(), ClientError> {
        futures::future::try_join_all(DashboardMetric::all(months).into_iter().map(|metric| self.refresh(metric)))
            .await?;
        Ok(())
    }
}
