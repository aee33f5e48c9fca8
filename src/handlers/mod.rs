//! Resource handlers
//!
//! Each handler pairs one [`Store`] with the REST resource behind it:
//! - `init` fetches only while the store is empty
//! - `refresh` replaces the store with the server snapshot on 200
//! - mutations refresh (the store and any dependent store) on their success
//!   status, and hand every other `{status, data}` back untouched

pub mod company_extra;
pub mod company_invoice;
pub mod dashboard;
pub mod employee;
pub mod insurance_company;
pub mod report;
pub mod role;
pub mod transaction;
pub mod user_extra;
pub mod user_invoice;

use std::sync::{Arc, Mutex};

use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::store::Store;
use crate::types::{AuthMode, HttpMethod};

pub use company_extra::CompanyExtraHandler;
pub use company_invoice::CompanyInvoiceHandler;
pub use dashboard::{DashboardHandler, DashboardMetric};
pub use employee::EmployeeHandler;
pub use insurance_company::InsuranceCompanyHandler;
pub use report::{ReportHandler, ReportKind};
pub use role::RoleHandler;
pub use transaction::TransactionHandler;
pub use user_extra::UserExtraHandler;
pub use user_invoice::UserInvoiceHandler;

/// Fetch `path` and publish the body into `store` on 200
pub(crate) async fn fetch_into(
    client: &ApiClient,
    store: &Store,
    method: HttpMethod,
    path: &str,
    body: Option<Value>,
) -> Result<(), ClientError> {
    let response = client
        .request(method, path, HeaderMap::new(), body, AuthMode::Access)
        .await?;

    if response.is(200) {
        store.set(response.data);
        Ok(())
    } else {
        tracing::warn!(store = store.name(), status = response.status, %path, "refresh rejected");
        Err(ClientError::UnexpectedStatus {
            status: response.status,
            url: path.to_string(),
            data: response.data,
        })
    }
}

/// Scope parameters of the last init/refresh, reused by mutation refreshes
#[derive(Debug)]
pub(crate) struct LastScope<T> {
    name: &'static str,
    inner: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for LastScope<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone> LastScope<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) fn record(&self, scope: T) {
        // A poisoned lock only means a panicking writer; the value is still usable
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(scope);
    }

    pub(crate) fn get(&self) -> Option<T> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub(crate) fn require(&self) -> Result<T, ClientError> {
        self.get().ok_or(ClientError::MissingScope(self.name))
    }
}
