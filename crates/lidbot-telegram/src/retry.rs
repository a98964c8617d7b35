//! Retry policy for Bot API polling.
//!
//! Flood-control answers are retried after exactly the wait the server asked
//! for. Other transient failures (network errors, 5xx, a 429 without
//! `retry_after`) back off exponentially with jitter. Everything else is
//! returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::TelegramError;

const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Returns `true` for errors that are worth retrying after a delay.
///
/// **Retriable:** timeouts, connection failures, HTTP 5xx, flood control, and
/// Bot API error codes 429 and 5xx.
///
/// **Not retriable:** other API errors (bad token, forbidden, bad request),
/// malformed responses and configuration errors.
pub(crate) fn is_retriable(err: &TelegramError) -> bool {
    match err {
        TelegramError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        TelegramError::Api { code, .. } => *code == 429 || *code >= 500,
        TelegramError::FloodControl { .. } => true,
        TelegramError::Deserialize { .. } | TelegramError::InvalidBaseUrl(_) => false,
    }
}

/// Wait before retry number `attempt` (1-based) after `err`.
///
/// Flood control uses the server's `retry_after` unchanged. Otherwise the
/// delay is `backoff_base_ms × 2ⁿ⁻¹` scaled by a random factor in
/// `[0.75, 1.25)`, never above 60 s.
pub(crate) fn retry_delay(err: &TelegramError, attempt: u32, backoff_base_ms: u64) -> Duration {
    if let TelegramError::FloodControl {
        retry_after_secs, ..
    } = err
    {
        return Duration::from_secs(*retry_after_secs);
    }
    let exponent = attempt.saturating_sub(1).min(10);
    let base = Duration::from_millis(backoff_base_ms.saturating_mul(1u64 << exponent));
    let jitter = rand::random::<f64>() * 0.5 + 0.75;
    base.mul_f64(jitter).min(MAX_BACKOFF)
}

/// Runs `operation`, retrying transient errors up to `max_retries` times.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, TelegramError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TelegramError>>,
{
    for attempt in 1..=max_retries {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if is_retriable(&err) => err,
            Err(err) => return Err(err),
        };
        let delay = retry_delay(&err, attempt, backoff_base_ms);
        tracing::warn!(
            attempt,
            max_retries,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            flood_control = matches!(err, TelegramError::FloodControl { .. }),
            error = %err,
            "Bot API call failed, retrying"
        );
        tokio::time::sleep(delay).await;
    }
    operation().await
}
