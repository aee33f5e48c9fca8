use std::sync::Arc;

use crate::account::AccountService;
use crate::api::{ApiClient, HttpTransport, Transport};
use crate::auth::SessionHandler;
use crate::config::ClientConfig;
use crate::handlers::{
    CompanyExtraHandler, CompanyInvoiceHandler, DashboardHandler, EmployeeHandler, InsuranceCompanyHandler,
    ReportHandler, RoleHandler, TransactionHandler, UserExtraHandler, UserInvoiceHandler,
};
use crate::notify::{LogNotifier, Notifier};
use crate::storage::{FileStorage, KeyValueStore, MemoryStorage};
use crate::store::Store;

/// One client, every store, every handler
///
/// Linked handlers share the dependent handler (and therefore its store), so
/// a role mutation refreshes the same employee store views subscribe to.
#[derive(Clone)]
pub struct Console {
    pub client: ApiClient,
    pub session: SessionHandler,
    pub accounts: AccountService,
    pub employees: EmployeeHandler,
    pub roles: RoleHandler,
    pub insurance_companies: InsuranceCompanyHandler,
    pub transactions: TransactionHandler,
    pub company_invoices: CompanyInvoiceHandler,
    pub company_extras: CompanyExtraHandler,
    pub user_invoices: UserInvoiceHandler,
    pub user_extras: UserExtraHandler,
    pub reports: ReportHandler,
    pub dashboard: DashboardHandler,
}

impl Console {
    pub fn new(
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn KeyValueStore>,
        session_storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let client = ApiClient::new(transport, tokens);

        let employees = EmployeeHandler::new(client.clone(), Store::list("employee"), notifier.clone());
        let roles = RoleHandler::new(client.clone(), Store::list("role"), employees.clone());
        let insurance_companies =
            InsuranceCompanyHandler::new(client.clone(), Store::list("insurance_company"));
        let transactions = TransactionHandler::new(client.clone(), Store::list("transaction"));

        let company_invoices =
            CompanyInvoiceHandler::new(client.clone(), Store::singleton("company_invoice"));
        let company_extras = CompanyExtraHandler::new(
            client.clone(),
            Store::list("company_extra"),
            company_invoices.clone(),
            notifier,
        );
        let user_invoices = UserInvoiceHandler::new(client.clone(), Store::singleton("user_invoice"));
        let user_extras =
            UserExtraHandler::new(client.clone(), Store::list("user_extra"), user_invoices.clone());

        Self {
            session: SessionHandler::new(client.clone()),
            accounts: AccountService::new(client.clone(), session_storage),
            reports: ReportHandler::new(client.clone()),
            dashboard: DashboardHandler::new(client.clone()),
            client,
            employees,
            roles,
            insurance_companies,
            transactions,
            company_invoices,
            company_extras,
            user_invoices,
            user_extras,
        }
    }

    /// reqwest transport, file-persisted tokens, log notifier
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        let tokens = FileStorage::from_config(config)?;
        tracing::debug!(base_url = %transport.base_url(), tokens = %tokens.path().display(), "console configured");

        Ok(Self::new(
            Arc::new(transport),
            Arc::new(tokens),
            Arc::new(MemoryStorage::new()),
            Arc::new(LogNotifier),
        ))
    }
}
