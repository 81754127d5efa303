use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{
	policies::ExponentialBackoff, Jitter, RetryTransientMiddleware, RetryableStrategy,
};

use crate::models::{BackoffStrategy, RetryConfig};

/// Builds the backoff policy described by a retry configuration
///
/// A fixed strategy is an exponential policy with base 1 and equal bounds, so every
/// retry waits exactly `interval`.
pub fn retry_policy(config: &RetryConfig) -> ExponentialBackoff {
	let (base, max_interval) = match config.backoff {
		BackoffStrategy::Fixed => (1, config.interval),
		BackoffStrategy::Exponential { max_interval } => (2, max_interval.max(config.interval)),
	};

	ExponentialBackoff::builder()
		.base(base)
		.retry_bounds(config.interval, max_interval)
		.jitter(Jitter::None)
		.build_with_max_retries(config.max_retries)
}

/// Creates a retryable HTTP client with middleware
///
/// # Parameters:
/// - `config`: Retry configuration
/// - `base_client`: The base HTTP client to use
/// - `custom_strategy`: Optional custom retry strategy, replacing the default transient
///   error classification of `reqwest-retry`
///
/// # Returns
/// A `ClientWithMiddleware` that includes retry capabilities
pub fn create_retryable_http_client<S>(
	config: &RetryConfig,
	base_client: reqwest::Client,
	custom_strategy: Option<S>,
) -> ClientWithMiddleware
where
	S: RetryableStrategy + Send + Sync + 'static,
{
	let policy = retry_policy(config);

	if let Some(strategy) = custom_strategy {
		ClientBuilder::new(base_client).with(
			RetryTransientMiddleware::new_with_policy_and_strategy(policy, strategy),
		)
	} else {
		ClientBuilder::new(base_client).with(RetryTransientMiddleware::new_with_policy(policy))
	}
	.build()
}
