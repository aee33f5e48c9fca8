use serde_json::json;

use super::{fetch_into, EmployeeHandler};
use crate::api::{ApiClient, ApiResponse};
use crate::error::ClientError;
use crate::store::Store;
use crate::types::HttpMethod;

const PATH: &str = "/api/user/role";

/// Roles, `GET /api/user/role`
///
/// Employees embed their role name, so every successful role mutation also
/// refreshes the employee roster.
#[derive(Clone)]
pub struct RoleHandler {
    client: ApiClient,
    store: Store,
    employees: EmployeeHandler,
}

impl RoleHandler {
    pub fn new(client: ApiClient, store: Store, employees: EmployeeHandler) -> Self {
        Self { client, store, employees }
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

    async fn refresh_with_employees(&self) -> Result<(), ClientError> {
        self.refresh().await?;
        self.employees.refresh().await
    }

    pub async fn create(&self, role_name: &str) -> Result<ApiResponse, ClientError> {
        let response = self.client.post(PATH, json!({ "name": role_name })).await?;
        if response.is(201) {
            self.refresh_with_employees().await?;
        }
        Ok(response)
    }

    /// Rename a role
    pub async fn put(&self, id: i64, name: &str) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .put(&format!("{}/{}", PATH, id), json!({ "name": name }))
            .await?;
        if response.is(200) {
            self.refresh_with_employees().await?;
        }
        Ok(response)
    }

    pub async fn delete(&self, id: i64) -> Result<ApiResponse, ClientError> {
        let response = self.client.delete(&format!("{}/{}", PATH, id)).await?;
        if response.is(200) {
            self.refresh_with_employees().await?;
        }
        Ok(response)
    }
}
