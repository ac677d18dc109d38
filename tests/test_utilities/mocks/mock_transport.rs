use async_trait::async_trait;
use build_compat::prelude::*;
use build_compat::shared::error::CheckerError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock HttpTransport serving canned responses
///
/// Routes are matched on the path without its query string. Unknown paths
/// fail like an unreachable server. Every requested path is recorded.
#[derive(Default, Clone)]
pub struct MockTransport {
    routes: HashMap<String, HttpResponse>,
    delays: HashMap<String, Duration>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `path` with 200 and the given JSON body
    pub fn with_json(self, path: &str, body: &str) -> Self {
        self.with_response(path, HttpResponse::ok(body))
    }

    pub fn with_response(mut self, path: &str, response: HttpResponse) -> Self {
        self.routes.insert(path.to_string(), response);
        self
    }

    /// Delays the answer for `path`
    pub fn with_delay(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(path.to_string(), delay);
        self
    }

    /// Serves the five default list endpoints with one option each
    pub fn with_default_lists(self) -> Self {
        self.with_json("/api/cpus", r#"[{"id": 1, "name": "Core i7-13700K"}]"#)
            .with_json("/api/gpus", r#"[{"value": "rtx4070", "label": "RTX 4070"}]"#)
            .with_json("/api/motherboards", r#"["Z790"]"#)
            .with_json("/api/memory", r#"[{"name": "DDR5 32GB"}]"#)
            .with_json("/api/psus", r#"["750W Gold"]"#)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests sent to paths starting with `prefix`
    pub fn requests_to(&self, prefix: &str) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.starts_with(prefix))
            .collect()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, path: &str) -> std::result::Result<HttpResponse, CheckerError> {
        self.requests.lock().unwrap().push(path.to_string());
        let route = path.split('?').next().unwrap_or(path);

        if let Some(delay) = self.delays.get(route) {
            tokio::time::sleep(*delay).await;
        }

        self.routes
            .get(route)
            .cloned()
            .ok_or_else(|| CheckerError::Transport {
                url: path.to_string(),
                details: "connection refused".to_string(),
            })
    }
}
