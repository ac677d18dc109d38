use crate::ports::outbound::{HttpResponse, HttpTransport};
use crate::shared::error::CheckerError;
use crate::shared::Result;
use async_trait::async_trait;

/// ReqwestTransport adapter for talking to the compatibility backend
///
/// This adapter implements the HttpTransport port with an async reqwest
/// client. Paths are resolved against the configured base URL.
///
/// The client is built without a request timeout and requests are never
/// retried: a hung backend leaves the caller pending, and a failed request
/// is reported once.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Creates a transport for the backend at `base_url`
    ///
    /// # Errors
    /// Returns an error if `base_url` is not an http(s) URL or the client
    /// cannot be built
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!(
                "Invalid base URL: {}\n\n💡 Hint: Use an absolute http(s) URL such as http://127.0.0.1:8000",
                base_url
            );
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("build-compat/{}", version);
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path onto the base URL
    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, path: &str) -> std::result::Result<HttpResponse, CheckerError> {
        let url = self.resolve(path);
        tracing::debug!(%url, "GET");

        let transport_error = |e: reqwest::Error| CheckerError::Transport {
            url: url.clone(),
            details: e.to_string(),
        };

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        Ok(HttpResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body,
        ))
    }
}
