//! Async client for the Koios Cardano REST API.
//!
//! The crate is organized in three layers:
//!
//! - `models`: configuration and the request model (endpoints, parameters, identifiers)
//! - `services`: the HTTP transport with bounded retries, the paginator and the
//!   per-resource endpoint adapters exposed through [`KoiosClient`]
//! - `utils`: HTTP client construction and logging setup
//!
//! ```no_run
//! use koios_client::{KoiosClient, KoiosConfig, Pagination};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KoiosClient::new(KoiosConfig::from_env()?)?;
//! let tip = client.tip().await?;
//! let blocks = client.blocks(Pagination::limit(10)).await?;
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod services;
pub mod utils;

pub use models::{
	AssetId, BackoffStrategy, BodyParams, CardanoNetwork, ConfigError, ContentType, Endpoint,
	HttpMethod, Identifiers, KoiosConfig, KoiosRequest, OgmiosRequest, OneOrMany, Pagination,
	QueryParams, RequestBody, RetryConfig,
};
pub use services::{
	client::KoiosClient,
	pagination::Paginator,
	transport::{HttpTransportClient, KoiosRetryStrategy, KoiosTransport, TransportError},
};
