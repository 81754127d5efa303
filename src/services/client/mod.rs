//! Koios endpoint adapters.
//!
//! [`KoiosClient`] exposes one async method per Koios endpoint, grouped by resource:
//!
//! - `account`: stake account queries
//! - `address`: address and payment credential queries
//! - `asset`: native asset queries
//! - `block`: block queries
//! - `epoch`: epoch summaries and protocol parameters
//! - `network`: chain tip, genesis and supply totals
//! - `ogmios`: JSON-RPC passthrough to Ogmios
//! - `pool`: stake pool queries
//! - `script`: script and datum queries
//! - `transactions`: transaction queries and submission
//!
//! Paginated adapters take a [`Pagination`]; everything else issues a single request.
//! Records are returned as opaque JSON values, exactly as Koios sends them.

use anyhow::Context;
use serde_json::Value;
use std::sync::Arc;

use crate::{
	models::{BodyParams, Endpoint, Identifiers, KoiosConfig, KoiosRequest, Pagination},
	services::{
		pagination::Paginator,
		transport::{HttpTransportClient, KoiosTransport, TransportError},
	},
};

mod account;
mod address;
mod asset;
mod block;
mod epoch;
mod network;
mod ogmios;
mod pool;
mod script;
mod transactions;

/// Client for the Koios REST API
///
/// Holds an immutable configuration and a shared transport; cloning is cheap and clones
/// share the connection pool.
pub struct KoiosClient<T: KoiosTransport = HttpTransportClient> {
	transport: Arc<T>,
	page_size: usize,
}

impl<T: KoiosTransport> Clone for KoiosClient<T> {
	fn clone(&self) -> Self {
		Self {
			transport: Arc::clone(&self.transport),
			page_size: self.page_size,
		}
	}
}

impl KoiosClient<HttpTransportClient> {
	/// Creates a client talking HTTP to the configured Koios instance
	///
	/// # Arguments
	/// * `config` - Client configuration; validated before use
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client or configuration error
	pub fn new(config: KoiosConfig) -> Result<Self, anyhow::Error> {
		config.validate().context("Invalid Koios configuration")?;
		let transport = HttpTransportClient::new(&config)?;
		tracing::debug!(
			network = %config.network,
			base_url = %config.base_url,
			page_size = config.page_size,
			"Created Koios client"
		);
		Ok(Self::with_transport(transport, config.page_size))
	}
}

impl<T: KoiosTransport> KoiosClient<T> {
	/// Creates a client on top of an existing transport
	pub fn with_transport(transport: T, page_size: usize) -> Self {
		Self {
			transport: Arc::new(transport),
			page_size,
		}
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Number of records Koios returns per full page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Fetches every page of a paginated endpoint
	pub(crate) async fn paginate(
		&self,
		request: KoiosRequest,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		Paginator::new(self.transport.as_ref(), self.page_size)
			.fetch_all(request, pagination)
			.await
	}

	/// Issues a single request whose answer is a list of records
	pub(crate) async fn fetch_records(
		&self,
		request: KoiosRequest,
	) -> Result<Vec<Value>, TransportError> {
		match self.transport.send_request(&request).await? {
			Value::Array(records) => Ok(records),
			_ => Err(TransportError::unexpected_response(
				request.endpoint,
				"a JSON array",
			)),
		}
	}

	/// Issues a single request and returns the answer as is
	pub(crate) async fn fetch_value(&self, request: KoiosRequest) -> Result<Value, TransportError> {
		self.transport.send_request(&request).await
	}
}

/// Normalizes a single identifier or a batch into a list
fn id_list(ids: impl Into<Identifiers>) -> Vec<String> {
	let ids: Identifiers = ids.into();
	ids.into_vec()
}

/// POST request whose body carries a batch of identifiers under `key`
fn batch_request(endpoint: Endpoint, key: &str, ids: impl Into<Identifiers>) -> KoiosRequest {
	let mut body = BodyParams::new();
	body.insert(key, id_list(ids));
	KoiosRequest::new(endpoint).with_body(body)
}
