use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::{ApiClient, ApiRequest, ApiResponse, Transport};
use crate::error::ClientError;
use crate::notify::{Confirmation, Notifier};
use crate::storage::{MemoryStorage, ACCESS_TOKEN_KEY};
use crate::types::HttpMethod;

/// Scripted in-memory backend for handler tests
///
/// Responses are keyed by method and path (query string included). When more
/// than one response is queued for a route they are served in order and the
/// last one keeps being served.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(HttpMethod, String), VecDeque<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, data: Value) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(ApiResponse::new(status, data));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Number of requests seen for one method and path
    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

}

/// Wrap a result the way every backend list route does
pub fn envelope(result: Value) -> Value {
    json!({"success": true, "message": "OK", "result": result})
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let key = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);

        let mut routes = self.routes.lock().unwrap();
        let response = match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(response.unwrap_or_else(|| ApiResponse::new(404, json!({"detail": "Not Found"}))))
    }
}

/// Collects confirmations instead of showing them
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Confirmation>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self) -> Vec<Confirmation> {
        self.seen.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn confirm(&self, confirmation: Confirmation) {
        self.seen.lock().unwrap().push(confirmation);
    }
}

/// Client wired to a mock transport with an access token already stored
pub fn mock_client(mock: &Arc<MockTransport>) -> ApiClient {
    let tokens = MemoryStorage::with_entries([(ACCESS_TOKEN_KEY, "test-access-token")]);
    ApiClient::new(mock.clone(), Arc::new(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queued_responses_are_served_in_order_then_repeat() {
        let mock = MockTransport::new();
        mock.respond(HttpMethod::Get, "/api/user", 200, json!([1]));
        mock.respond(HttpMethod::Get, "/api/user", 200, json!([1, 2]));

        let request = || ApiRequest {
            method: HttpMethod::Get,
            path: "/api/user".to_string(),
            headers: Default::default(),
            body: None,
        };

        assert_eq!(mock.send(request()).await.unwrap().data, json!([1]));
        assert_eq!(mock.send(request()).await.unwrap().data, json!([1, 2]));
        assert_eq!(mock.send(request()).await.unwrap().data, json!([1, 2]));
        assert_eq!(mock.count(HttpMethod::Get, "/api/user"), 3);
    }

    #[tokio::test]
    async fn unknown_routes_answer_404() {
        let mock = MockTransport::new();
        let response = mock
            .send(ApiRequest {
                method: HttpMethod::Delete,
                path: "/api/nowhere".to_string(),
                headers: Default::default(),
                body: None,
            })
            .await
            .unwrap();
        assert_eq!(response.status, 404);
    }
}
