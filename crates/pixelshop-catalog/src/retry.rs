//! Retry with exponential backoff for transient catalog-fetch errors.
//!
//! Only conditions that can plausibly clear on their own are retried;
//! anything deterministic (missing endpoint, unparseable payload, bad
//! record) propagates immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::CatalogError;

/// Returns `true` if `err` represents a transient condition worth retrying
/// after a backoff delay.
///
/// Retriable:
/// - [`CatalogError::RateLimited`] — HTTP 429; the source asked us to back off.
/// - [`CatalogError::Http`] — network-level failure (connection reset, timeout).
///
/// Everything else is deterministic and propagates immediately.
fn is_retriable(err: &CatalogError) -> bool {
    matches!(
        err,
        CatalogError::RateLimited { .. } | CatalogError::Http(_)
    )
}

/// Executes `operation` with exponential backoff retries on transient
/// errors.
///
/// On a retriable error the function sleeps `backoff_base_secs * 2^attempt`
/// seconds and tries again, up to `max_retries` additional attempts after
/// the first. With `max_retries = 3` the operation runs at most 4 times.
/// Non-retriable errors return without sleeping.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, CatalogError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let mut last_err;
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                last_err = err;
            }
        }

        // Shift capped so extreme retry configs cannot overflow the delay.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %last_err,
            "transient catalog fetch error — retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
