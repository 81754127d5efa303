//! Domain models for the Koios client.
//!
//! - `config`: client configuration loading and validation
//! - `core`: endpoints, request parameters and identifier types

mod config;
mod core;

pub use config::{
	env, ApiToken, BackoffStrategy, CardanoNetwork, ConfigError, KoiosConfig, RetryConfig,
	DEFAULT_MAX_BACKOFF, DEFAULT_MAX_RETRIES, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT,
	DEFAULT_RETRY_INTERVAL, MAINNET_BASE_URL, PREPROD_BASE_URL, PREVIEW_BASE_URL,
};

pub use core::{
	AssetId, BodyParams, ContentType, Endpoint, HttpMethod, Identifiers, KoiosRequest,
	OgmiosRequest, OneOrMany, Pagination, ParseAssetIdError, QueryParams, RequestBody,
	OFFSET_PARAM, ORDER_BY_BLOCK_HEIGHT_ASC, ORDER_PARAM,
};
