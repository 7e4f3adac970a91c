//! Retry with exponential back-off and jitter for generation calls.
//!
//! The default merge configuration performs zero automatic retries — the
//! deterministic fallback provides availability. When a caller opts into
//! bounded retry, only transient errors are retried; API-level and
//! deserialize errors are returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::GenError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - Network-level failures: timeout, connection reset.
/// - HTTP 5xx responses.
///
/// **Not retriable (hard stop):**
/// - [`GenError::Api`] — application-level error; retrying won't fix it.
/// - [`GenError::Deserialize`] — malformed response envelope.
/// - [`GenError::EmptyCompletion`] — the model chose to return nothing.
pub(crate) fn is_retriable(err: &GenError) -> bool {
    match err {
        GenError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        GenError::Api(_) | GenError::Deserialize { .. } | GenError::EmptyCompletion => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on
/// transient errors.
///
/// Delay doubles per attempt from `backoff_base_ms`, with ±25 % jitter,
/// capped at 30 s. Non-retriable errors are returned immediately. With
/// `max_retries = 0` this is a plain single call.
///
/// # Errors
///
/// Returns the last [`GenError`] once retries are exhausted.
pub async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, GenError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GenError>>,
{
    const MAX_DELAY_MS: u64 = 30_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "generation transient error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
