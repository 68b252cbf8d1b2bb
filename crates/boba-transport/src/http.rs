//! HTTP transport.
//!
//! Posts [`ChatRequest`] bodies to `{endpoint}/api/chat` with reqwest and
//! decodes [`ChatResponse`]. One attempt per call, bounded by the configured
//! timeout.

use std::time::Duration;

use boba_app::{Message, Transport};
use reqwest::{Client, Url};

use crate::{
    TransportError,
    wire::{ChatRequest, ChatResponse},
};

/// Path of the chat endpoint, relative to the service root.
///
/// Relative so that joining keeps any path prefix of the endpoint.
const CHAT_PATH: &str = "api/chat";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportConfig {
    /// Service root, e.g. `http://localhost:5000`.
    pub endpoint: String,
    /// Upper bound on a whole request, including reading the body.
    pub timeout: Duration,
}

impl HttpTransportConfig {
    /// Config for `endpoint` with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), timeout: DEFAULT_TIMEOUT }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Transport that talks to the assistant service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: Url,
}

impl HttpTransport {
    /// Build a transport for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid base URL or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &HttpTransportConfig) -> Result<Self, TransportError> {
        let mut base = Url::parse(&config.endpoint)
            .map_err(|e| TransportError::InvalidEndpoint(format!("{}: {e}", config.endpoint)))?;
        if base.cannot_be_a_base() {
            return Err(TransportError::InvalidEndpoint(config.endpoint.clone()));
        }
        // `https://host/app` must resolve like `https://host/app/`
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let url = base
            .join(CHAT_PATH)
            .map_err(|e| TransportError::InvalidEndpoint(format!("{}: {e}", config.endpoint)))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self { client, url })
    }

    /// Full URL requests are posted to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Transport for HttpTransport {
    type Error = TransportError;

    async fn post_message(
        &self,
        message: &str,
        history: &[Message],
    ) -> Result<String, TransportError> {
        let body = ChatRequest::new(message, history);

        let response = self.client.post(self.url.clone()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, url = %self.url, "chat request rejected");
            return Err(TransportError::Status(status.as_u16()));
        }

        let decoded: ChatResponse = response.json().await?;
        Ok(decoded.reply.unwrap_or_default())
    }
}
