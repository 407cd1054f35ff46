//! Retry engine for transient transport failures

use super::transport::{HttpReply, HttpRequest, TransportError};
use super::types::LlmClient;
use crate::config::provider::{MAX_BACKOFF, MAX_JITTER};
use rand::Rng;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{info, instrument, warn};

/// First pause between attempts
const BASE_BACKOFF: Duration = Duration::from_millis(250);

/// Pause before retry number `attempt + 1`.
///
/// Exponential from 250ms, capped at 2s, plus up to 100ms of jitter.
pub fn backoff_delay(attempt: u32) -> Duration {
    let exponential = BASE_BACKOFF.saturating_mul(2_u32.saturating_pow(attempt.min(8)));
    let jitter_ms = rand::thread_rng().gen_range(0..=MAX_JITTER.as_millis() as u64);
    exponential.min(MAX_BACKOFF) + Duration::from_millis(jitter_ms)
}

impl LlmClient {
    /// Send a request, retrying only transient transport failures.
    ///
    /// Any received HTTP reply, whatever its status, is returned as-is on
    /// the attempt that produced it. Each attempt is bounded by
    /// `request.timeout`; at most `max_retries` retries follow the first
    /// attempt.
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub(super) async fn send_with_retry(
        &self,
        provider: &str,
        request: &HttpRequest,
        max_retries: u32,
    ) -> Result<HttpReply, TransportError> {
        let mut last_error = None;

        for attempt in 0..=max_retries {
            let outcome = match timeout(request.timeout, self.transport.send(request)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(TransportError::Timeout(request.timeout)),
            };

            match outcome {
                Ok(reply) => {
                    if attempt > 0 {
                        info!(attempt = attempt + 1, status = reply.status, "request succeeded after retry");
                    }
                    return Ok(reply);
                }
                Err(error) => {
                    if !error.is_transient() {
                        warn!(error = %error, "non-retryable transport error");
                        return Err(error);
                    }

                    if attempt < max_retries {
                        let delay = backoff_delay(attempt);
                        warn!(
                            attempt = attempt + 1,
                            max_attempts = max_retries + 1,
                            delay_secs = delay.as_secs_f64(),
                            error = %error,
                            "{} request failed, retrying",
                            provider
                        );
                        sleep(delay).await;
                    } else {
                        warn!(
                            attempts = max_retries + 1,
                            error = %error,
                            "all retry attempts exhausted"
                        );
                    }
                    last_error = Some(error);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            TransportError::Other(format!(
                "All {} attempts failed without error details",
                max_retries + 1
            ))
        }))
    }
}
