//! HTTP transport seam
//!
//! [`Transport`] is the only I/O capability the client needs. The default
//! [`HttpTransport`] wraps a pooled `reqwest::Client`; one such client is
//! created lazily per process and shared by every [`LlmClient`](super::LlmClient).

use crate::error::{LmChatError, LmResult};
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Idle pooled connections are closed after this long
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Connect phase bound, independent of the per-attempt timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

static SHARED_HTTP_CLIENT: OnceCell<Client> = OnceCell::new();

/// Substrings that mark a failure description as a connectivity problem
const CONNECTION_MARKERS: &[&str] = &[
    "connection refused",
    "connection reset",
    "connection aborted",
    "connection closed",
    "error trying to connect",
    "failed to lookup",
    "dns error",
    "name resolution",
    "no such host",
    "unreachable",
    "tcp connect error",
];

/// A fully assembled outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
    /// Bound for connect + send + receive of one attempt
    pub timeout: Duration,
}

/// A received HTTP response, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Failures below the HTTP layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The attempt did not finish within its timeout
    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// Connection could not be established (refused, DNS, unreachable)
    #[error("connection failed: {0}")]
    Connect(String),

    /// Anything else the HTTP stack reported
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Map a reqwest error, keeping the whole source chain in the description
    pub fn from_reqwest(error: &reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            return Self::Timeout(timeout);
        }
        let description = describe_error_chain(error);
        if error.is_connect() {
            Self::Connect(description)
        } else {
            Self::Other(description)
        }
    }

    /// Eligible for an automatic retry
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Connect(_) => true,
            Self::Other(description) => describes_connection_problem(description),
        }
    }
}

/// True when a free-text failure description points at connectivity
pub fn describes_connection_problem(description: &str) -> bool {
    let lower = description.to_lowercase();
    CONNECTION_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn describe_error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}

/// Outbound HTTP capability
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `request.body` as JSON to `request.url`
    async fn send(&self, request: &HttpRequest) -> Result<HttpReply, TransportError>;
}

/// Get the process-wide pooled HTTP client, creating it on first use
pub fn shared_http_client() -> LmResult<Client> {
    SHARED_HTTP_CLIENT
        .get_or_try_init(|| {
            debug!("Creating shared HTTP client");
            Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .pool_idle_timeout(POOL_IDLE_TIMEOUT)
                .build()
                .map_err(|e| LmChatError::http(format!("Failed to create HTTP client: {}", e)))
        })
        .cloned()
}

/// [`Transport`] over a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Transport over the process-wide shared client
    pub fn shared() -> LmResult<Self> {
        Ok(Self::new(shared_http_client()?))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpReply, TransportError> {
        let body = serde_json::to_vec(&request.body)
            .map_err(|e| TransportError::Other(format!("Failed to serialize request body: {}", e)))?;

        let mut builder = self
            .client
            .post(&request.url)
            .timeout(request.timeout)
            .body(body);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&e, request.timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(&e, request.timeout))?;

        Ok(HttpReply { status, body })
    }
}
