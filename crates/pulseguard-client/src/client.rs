//! Main PulseGuard API client implementation.

use crate::api::{DnsApi, IpApi};
use crate::config::RetryConfig;
use pulseguard_core::{PulseError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The PulseGuard API base URL
const DEFAULT_BASE_URL: &str = "https://api.pulseguard.io/v1";

/// Public IP-echo service used by the self-IP flow
const DEFAULT_ECHO_URL: &str = "https://api.ipify.org/?format=json";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated HTTP client for the PulseGuard backend.
///
/// Attaches the bearer credential to every backend request. Credential
/// acquisition and renewal are the session layer's problem, not this
/// client's.
#[derive(Clone)]
pub struct PulseClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    token: String,
    base_url: String,
    echo_url: String,
    organization: Option<String>,
    retry: RetryConfig,
}

impl PulseClient {
    /// Create a new client with the given bearer token using default settings
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        PulseClientBuilder::new(token).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(token: impl Into<String>) -> PulseClientBuilder {
        PulseClientBuilder::new(token)
    }

    /// Access DNS lookup endpoints
    #[must_use]
    pub fn dns(&self) -> DnsApi<'_> {
        DnsApi::new(self)
    }

    /// Access IP lookup endpoints
    #[must_use]
    pub fn ip(&self) -> IpApi<'_> {
        IpApi::new(self)
    }

    /// Perform a GET request against the backend
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// Perform a GET request with query parameters, retrying retryable
    /// transport failures per the configured policy
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params);
        let mut attempt = 0;

        loop {
            match self.try_get(&url).await {
                Err(e) if e.is_retryable() && attempt < self.inner.retry.max_retries => {
                    let backoff = self.inner.retry.backoff_for(attempt);
                    warn!(url = %url, attempt, error = %e, "retrying backend request");
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// Fetch from the public IP-echo service.
    ///
    /// The echo host is not the PulseGuard backend, so no credential is
    /// attached and no retry policy applies; callers decide how an echo
    /// failure surfaces.
    pub(crate) async fn get_public<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "GET public echo");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PulseError::Http(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// The configured public IP-echo endpoint
    pub(crate) fn echo_url(&self) -> &str {
        &self.inner.echo_url
    }

    async fn try_get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "GET request");

        let mut request = self.inner.http.get(url).bearer_auth(&self.inner.token);
        if let Some(org) = &self.inner.organization {
            request = request.header("X-Organization-Id", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PulseError::Http(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Build a URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);
        let mut separator = '?';

        for (key, value) in params {
            url.push(separator);
            separator = '&';
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| PulseError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(PulseError::Json)
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a PulseError
    async fn handle_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // Try to parse error message from JSON
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            401 => Err(PulseError::Unauthorized),
            _ => {
                warn!(status, "backend returned an error response");
                Err(PulseError::Api { code: status, message })
            }
        }
    }
}

/// Builder for configuring a [`PulseClient`]
pub struct PulseClientBuilder {
    token: String,
    base_url: String,
    echo_url: String,
    timeout: Duration,
    user_agent: String,
    organization: Option<String>,
    retry: RetryConfig,
}

impl PulseClientBuilder {
    /// Create a new builder with the given bearer token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            echo_url: DEFAULT_ECHO_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("pulseguard-toolbox/{}", env!("CARGO_PKG_VERSION")),
            organization: None,
            retry: RetryConfig::default(),
        }
    }

    /// Set the backend base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the public IP-echo endpoint
    #[must_use]
    pub fn echo_url(mut self, url: impl Into<String>) -> Self {
        self.echo_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Scope requests to an organization.
    ///
    /// The id is sent as an explicit header on every backend request instead
    /// of living in ambient state somewhere.
    #[must_use]
    pub fn organization(mut self, id: impl Into<String>) -> Self {
        self.organization = Some(id.into());
        self
    }

    /// Set retry configuration
    #[must_use]
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = config;
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> PulseClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        PulseClient {
            inner: Arc::new(ClientInner {
                http,
                token: self.token,
                base_url: self.base_url,
                echo_url: self.echo_url,
                organization: self.organization,
                retry: self.retry,
            }),
        }
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
