//! LLM client construction

use super::transport::{HttpTransport, Transport};
use super::types::LlmClient;
use crate::error::LmResult;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

impl LlmClient {
    /// Create a client over the process-wide shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the shared HTTP client cannot be created
    /// (for example when the TLS backend fails to initialize).
    pub fn new() -> LmResult<Self> {
        let transport = HttpTransport::shared()?;
        debug!("Created LLM client over shared HTTP transport");
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client over a caller-provided `reqwest::Client`
    pub fn with_http_client(client: Client) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(client)))
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}
