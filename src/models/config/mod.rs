//! Client configuration.
//!
//! A [`KoiosConfig`] is built once, validated, and handed to the client. It can be
//! assembled in code, read from the process environment, read from a `.env` file or
//! loaded from a JSON file. All sources go through the same resolution rules:
//!
//! - the network selects a default base URL unless one is given explicitly
//! - a custom network requires an explicit base URL
//! - empty values are treated as unset

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::{fmt, path::Path, str::FromStr, time::Duration};
use url::Url;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Default base URL for Cardano mainnet
pub const MAINNET_BASE_URL: &str = "https://api.koios.rest/api/v1";
/// Default base URL for the preprod testnet
pub const PREPROD_BASE_URL: &str = "https://preprod.koios.rest/api/v1";
/// Default base URL for the preview testnet
pub const PREVIEW_BASE_URL: &str = "https://preview.koios.rest/api/v1";

/// Number of records Koios returns in a full page
pub const DEFAULT_PAGE_SIZE: usize = 1000;
/// Default delay between retries
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);
/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 5;
/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Default cap for exponential backoff
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Environment variable names recognized by [`KoiosConfig::from_env`]
pub mod env {
	pub const NETWORK: &str = "CARDANO_NET";
	pub const BASE_URL: &str = "API_BASE_URL";
	pub const API_TOKEN: &str = "KOIOS_API_TOKEN";
	pub const SLEEP_TIME: &str = "SLEEP_TIME";
	pub const MAX_RETRIES: &str = "KOIOS_MAX_RETRIES";
	pub const BACKOFF: &str = "KOIOS_BACKOFF";
	pub const MAX_BACKOFF: &str = "KOIOS_MAX_BACKOFF";
	pub const PAGE_SIZE: &str = "API_RESP_COUNT";
	pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
}

/// Cardano network served by the Koios instance
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardanoNetwork {
	#[default]
	Mainnet,
	Preprod,
	Preview,
	/// Any other network; requires an explicit base URL
	Custom(String),
}

impl CardanoNetwork {
	/// Default Koios base URL for the network, if it has one
	pub fn default_base_url(&self) -> Option<&'static str> {
		match self {
			Self::Mainnet => Some(MAINNET_BASE_URL),
			Self::Preprod => Some(PREPROD_BASE_URL),
			Self::Preview => Some(PREVIEW_BASE_URL),
			Self::Custom(_) => None,
		}
	}
}

impl FromStr for CardanoNetwork {
	type Err = std::convert::Infallible;

	/// Accepts the network names as well as the `cardano-cli` style flags
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s.trim() {
			"mainnet" | "--mainnet" => Self::Mainnet,
			"preprod" | "--testnet-magic 1" => Self::Preprod,
			"preview" | "--testnet-magic 2" => Self::Preview,
			other => Self::Custom(other.to_string()),
		})
	}
}

impl fmt::Display for CardanoNetwork {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Mainnet => write!(f, "mainnet"),
			Self::Preprod => write!(f, "preprod"),
			Self::Preview => write!(f, "preview"),
			Self::Custom(name) => write!(f, "{}", name),
		}
	}
}

/// Bearer token sent with every request
///
/// The value is wiped from memory on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiToken(String);

impl ApiToken {
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}

	/// Returns the raw token value
	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for ApiToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("ApiToken(<redacted>)")
	}
}

/// How the delay between retries evolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackoffStrategy {
	/// Always wait the configured interval
	Fixed,
	/// Double the wait after every retry, up to `max_interval`
	Exponential { max_interval: Duration },
}

/// Bounded retry policy for transient failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
	/// Retries after the first attempt; 0 disables retrying
	pub max_retries: u32,
	/// Delay before the first retry
	pub interval: Duration,
	pub backoff: BackoffStrategy,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_retries: DEFAULT_MAX_RETRIES,
			interval: DEFAULT_RETRY_INTERVAL,
			backoff: BackoffStrategy::Fixed,
		}
	}
}

impl RetryConfig {
	/// Fixed-interval policy
	pub fn fixed(max_retries: u32, interval: Duration) -> Self {
		Self {
			max_retries,
			interval,
			backoff: BackoffStrategy::Fixed,
		}
	}

	/// Exponential policy starting at `interval` and capped at `max_interval`
	pub fn exponential(max_retries: u32, interval: Duration, max_interval: Duration) -> Self {
		Self {
			max_retries,
			interval,
			backoff: BackoffStrategy::Exponential { max_interval },
		}
	}
}

/// Immutable configuration for a Koios client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KoiosConfig {
	pub network: CardanoNetwork,
	/// Base URL without trailing slash, e.g. `https://api.koios.rest/api/v1`
	pub base_url: String,
	pub api_token: Option<ApiToken>,
	pub retry: RetryConfig,
	/// Number of records in a full page, used to detect the last page
	pub page_size: usize,
	pub request_timeout: Duration,
}

impl Default for KoiosConfig {
	fn default() -> Self {
		Self::for_network(CardanoNetwork::Mainnet)
	}
}

/// Raw settings shared by every configuration source
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
	network: Option<String>,
	base_url: Option<String>,
	api_token: Option<String>,
	/// Seconds between retries
	sleep_time: Option<f64>,
	max_retries: Option<u32>,
	/// `fixed` or `exponential`
	backoff: Option<String>,
	/// Seconds; cap for exponential backoff
	max_backoff: Option<f64>,
	page_size: Option<usize>,
	/// Seconds
	request_timeout: Option<f64>,
}

impl KoiosConfig {
	/// Configuration with defaults for the given network
	///
	/// A custom network gets an empty base URL and fails validation until
	/// [`KoiosConfig::with_base_url`] is called.
	pub fn for_network(network: CardanoNetwork) -> Self {
		Self {
			base_url: network.default_base_url().unwrap_or_default().to_string(),
			network,
			api_token: None,
			retry: RetryConfig::default(),
			page_size: DEFAULT_PAGE_SIZE,
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
		}
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
		let token = token.into();
		self.api_token = (!token.is_empty()).then(|| ApiToken::new(token));
		self
	}

	pub fn with_retry(mut self, retry: RetryConfig) -> Self {
		self.retry = retry;
		self
	}

	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	/// Reads the configuration from the process environment
	///
	/// See the [`env`] module for the variable names.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Reads the configuration from an arbitrary key lookup using the environment
	/// variable names
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

		let raw = ConfigFile {
			network: get(env::NETWORK),
			base_url: get(env::BASE_URL),
			api_token: get(env::API_TOKEN),
			sleep_time: get(env::SLEEP_TIME)
				.map(|v| parse_value(env::SLEEP_TIME, &v))
				.transpose()?,
			max_retries: get(env::MAX_RETRIES)
				.map(|v| parse_value(env::MAX_RETRIES, &v))
				.transpose()?,
			backoff: get(env::BACKOFF),
			max_backoff: get(env::MAX_BACKOFF)
				.map(|v| parse_value(env::MAX_BACKOFF, &v))
				.transpose()?,
			page_size: get(env::PAGE_SIZE)
				.map(|v| parse_value(env::PAGE_SIZE, &v))
				.transpose()?,
			request_timeout: get(env::REQUEST_TIMEOUT)
				.map(|v| parse_value(env::REQUEST_TIMEOUT, &v))
				.transpose()?,
		};

		Self::resolve(raw)
	}

	/// Reads the configuration from a `.env` file without modifying the process
	/// environment
	pub fn from_dotenv(path: &Path) -> Result<Self, ConfigError> {
		let mut values = std::collections::HashMap::new();
		for item in dotenvy::from_path_iter(path)? {
			let (key, value) = item?;
			values.insert(key, value);
		}
		Self::from_lookup(|key| values.get(key).cloned())
	}

	/// Loads the configuration from a JSON file
	///
	/// Keys: `network`, `base_url`, `api_token`, `sleep_time`, `max_retries`, `backoff`,
	/// `max_backoff`, `page_size`, `request_timeout`. Durations are in seconds.
	pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let raw: ConfigFile = serde_json::from_reader(file)?;
		Self::resolve(raw)
	}

	fn resolve(raw: ConfigFile) -> Result<Self, ConfigError> {
		let network = raw
			.network
			.as_deref()
			.map(|n| n.parse::<CardanoNetwork>().unwrap_or_default())
			.unwrap_or_default();

		let mut config = Self::for_network(network);

		if let Some(base_url) = raw.base_url.filter(|url| !url.is_empty()) {
			config = config.with_base_url(base_url);
		} else if let CardanoNetwork::Custom(name) = &config.network {
			return Err(ConfigError::validation_error(format!(
				"network '{}' has no default base URL, set {}",
				name,
				env::BASE_URL
			)));
		}

		if let Some(token) = raw.api_token {
			config = config.with_api_token(token);
		}

		if let Some(max_retries) = raw.max_retries {
			config.retry.max_retries = max_retries;
		}
		if let Some(seconds) = raw.sleep_time {
			config.retry.interval = seconds_to_duration("sleep_time", seconds)?;
		}
		let max_backoff = raw
			.max_backoff
			.map(|seconds| seconds_to_duration("max_backoff", seconds))
			.transpose()?
			.unwrap_or(DEFAULT_MAX_BACKOFF);
		config.retry.backoff = match raw.backoff.as_deref().map(str::trim) {
			None | Some("fixed") => BackoffStrategy::Fixed,
			Some("exponential") => BackoffStrategy::Exponential {
				max_interval: max_backoff,
			},
			Some(other) => {
				return Err(ConfigError::parse_error(format!(
					"unknown backoff strategy '{}', expected 'fixed' or 'exponential'",
					other
				)))
			}
		};

		if let Some(page_size) = raw.page_size {
			config.page_size = page_size;
		}
		if let Some(seconds) = raw.request_timeout {
			config.request_timeout = seconds_to_duration("request_timeout", seconds)?;
		}

		config.validate()?;
		Ok(config)
	}

	/// Checks the configuration for values the client cannot work with
	pub fn validate(&self) -> Result<(), ConfigError> {
		let url = Url::parse(&self.base_url).map_err(|e| {
			ConfigError::validation_error(format!("invalid base URL '{}': {}", self.base_url, e))
		})?;
		if !matches!(url.scheme(), "http" | "https") {
			return Err(ConfigError::validation_error(format!(
				"base URL must use http or https, got '{}'",
				url.scheme()
			)));
		}

		if self.page_size == 0 {
			return Err(ConfigError::validation_error("page size must be greater than 0"));
		}

		if self.request_timeout.is_zero() {
			return Err(ConfigError::validation_error(
				"request timeout must be greater than 0",
			));
		}

		if let BackoffStrategy::Exponential { max_interval } = self.retry.backoff {
			if max_interval < self.retry.interval {
				return Err(ConfigError::validation_error(
					"maximum backoff must not be shorter than the retry interval",
				));
			}
		}

		Ok(())
	}
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
	T: FromStr,
	T::Err: fmt::Display,
{
	value
		.trim()
		.parse()
		.map_err(|e| ConfigError::parse_error(format!("invalid value for {}: {}", key, e)))
}

fn seconds_to_duration(key: &str, seconds: f64) -> Result<Duration, ConfigError> {
	Duration::try_from_secs_f64(seconds)
		.map_err(|e| ConfigError::parse_error(format!("invalid duration for {}: {}", key, e)))
}
