//! Classification of responses for the retry middleware.

use reqwest_middleware::Error as MiddlewareError;
use reqwest_retry::{default_on_request_failure, Retryable, RetryableStrategy};

use super::error::is_transient_status;

/// Retry strategy for Koios requests
///
/// - success responses are final
/// - 5xx, 408 and 429 are transient
/// - any other status is a client error and is never retried
/// - connection failures and timeouts are transient
#[derive(Debug, Clone, Copy, Default)]
pub struct KoiosRetryStrategy;

impl RetryableStrategy for KoiosRetryStrategy {
	fn handle(&self, res: &Result<reqwest::Response, MiddlewareError>) -> Option<Retryable> {
		match res {
			Ok(response) => {
				let status = response.status();
				if status.is_success() {
					None
				} else if is_transient_status(status) {
					tracing::warn!(
						url = %response.url(),
						status = status.as_u16(),
						"Transient HTTP status"
					);
					Some(Retryable::Transient)
				} else {
					Some(Retryable::Fatal)
				}
			}
			Err(error) => {
				let decision = default_on_request_failure(error);
				if matches!(decision, Some(Retryable::Transient)) {
					tracing::warn!("Transient network error: {}", error);
				}
				decision
			}
		}
	}
}
