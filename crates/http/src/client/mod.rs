//! Depot API client

pub mod auth;
pub mod error;

use depot_core::ApiResponse;
use error::ClientError;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Default request timeout; navigation must not stall on a dead server.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Depot API client
///
/// Cheap to clone; the underlying connection pool and cookie store are
/// shared between clones.
#[derive(Clone)]
pub struct DepotClient {
    client: Client,
    base_url: String,
}

impl DepotClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> DepotClientBuilder {
        DepotClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for an API path
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and deserialize the success body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            tracing::debug!(%status, "api call returned error status");
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// Execute a request against an endpoint that answers with the
    /// [`ApiResponse`] envelope on both success and failure statuses.
    ///
    /// A non-2xx status with an envelope-shaped body is a normal outcome
    /// (wrong password, taken username) and is returned as `Ok`; only
    /// transport failures and non-envelope bodies become errors.
    pub async fn execute_envelope(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ApiResponse>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(err) if status.is_success() => Err(err.into()),
            Err(_) => Err(ClientError::from_status(status, body)),
        }
    }
}

/// Builder for [`DepotClient`]
#[derive(Default)]
pub struct DepotClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl DepotClientBuilder {
    /// Set the base URL (required)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DepotClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = ClientBuilder::new()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| "depot-client/0.1.0".to_string()),
            )
            // Session cookies must flow on every call, like a browser
            // fetch with credentials: "include".
            .cookie_store(true)
            .build()?;

        Ok(DepotClient { client, base_url })
    }
}
