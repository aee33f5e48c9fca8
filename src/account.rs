use std::sync::Arc;

use serde_json::Value;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::storage::KeyValueStore;

/// Session key the profile cache is read from
pub const USER_INFO_READ_KEY: &str = "UserItem";
/// Session key the fetched profile response is written to
pub const USER_INFO_WRITE_KEY: &str = "UserInfo";

/// Profile lookups cached in page-scoped storage
///
/// Reads and writes use different keys, so a cached entry is only ever found
/// when something else populated `UserItem`. Every other lookup goes to the
/// server.
#[derive(Clone)]
pub struct AccountService {
    client: ApiClient,
    session: Arc<dyn KeyValueStore>,
}

impl AccountService {
    pub fn new(client: ApiClient, session: Arc<dyn KeyValueStore>) -> Self {
        Self { client, session }
    }

    /// Profile of user `id`: the `result` field of `GET /api/user/{id}`
    pub async fn user_info(&self, id: i64) -> Result<Value, ClientError> {
        if let Some(cached) = self.session.get(USER_INFO_READ_KEY)? {
            tracing::debug!(user_id = id, "user info served from session storage");
            return Ok(cached_profile(cached));
        }

        let path = format!("/api/user/{}", id);
        let response = self.client.get(&path).await?;
        if !response.is(200) {
            return Err(ClientError::UnexpectedStatus {
                status: response.status,
                url: path,
                data: response.data,
            });
        }

        self.session
            .set(USER_INFO_WRITE_KEY, &serde_json::to_string(&response.data)?)?;
        Ok(response.data.get("result").cloned().unwrap_or(Value::Null))
    }
}

/// A `UserItem` entry is returned as stored; JSON payloads are unwrapped to `result`
fn cached_profile(raw: String) -> Value {
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => value.get("result").cloned().unwrap_or(value),
        Err(_) => Value::String(raw),
    }
}
