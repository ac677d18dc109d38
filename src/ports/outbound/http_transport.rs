use crate::shared::error::CheckerError;
use async_trait::async_trait;
use serde_json::Value;

/// A completed HTTP exchange, independent of the client library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// 200 OK with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, "OK", body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON
    pub fn json(&self, url: &str) -> Result<Value, CheckerError> {
        serde_json::from_str(&self.body).map_err(|e| CheckerError::Decode {
            url: url.to_string(),
            details: e.to_string(),
        })
    }
}

/// HttpTransport port for issuing GET requests against the backend
///
/// Endpoints are passed as paths (`/api/cpus`) or paths with a query
/// string; implementations resolve them against their own base URL.
///
/// No timeout or cancellation is part of this contract: a request that
/// never completes leaves its caller pending.
///
/// # Async Support
/// Implementations must be `Send + Sync` so the five list loads can share
/// one transport.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request
    ///
    /// # Errors
    /// Returns `CheckerError::Transport` when no response was received.
    /// Non-2xx statuses are NOT errors at this level; they come back as a
    /// response so callers can read the error body.
    async fn get(&self, path: &str) -> Result<HttpResponse, CheckerError>;
}
