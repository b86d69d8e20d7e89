//! Scripted transport for tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::transport::{ApiResponse, Transport};
use crate::error::Result;

type CallLog = Arc<Mutex<Vec<Vec<(String, String)>>>>;

/// Answers requests from a table keyed by endpoint and the request's
/// `id`/`playlistId` parameter. Unknown requests get a 404.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: HashMap<(String, String), ApiResponse>,
    calls: CallLog,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(
        mut self,
        endpoint: &str,
        id: &str,
        status: u16,
        body: serde_json::Value,
    ) -> Self {
        self.responses.insert(
            (endpoint.to_string(), id.to_string()),
            ApiResponse::new(status, body),
        );
        self
    }

    /// Shared log of every request's query parameters
    pub(crate) fn calls(&self) -> CallLog {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<ApiResponse> {
        let params: Vec<(String, String)> = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let id = params
            .iter()
            .find(|(k, _)| k == "id" || k == "playlistId")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();

        self.calls.lock().unwrap().push(params);

        Ok(self
            .responses
            .get(&(endpoint.to_string(), id))
            .cloned()
            .unwrap_or_else(|| ApiResponse::new(404, serde_json::Value::Null)))
    }
}
