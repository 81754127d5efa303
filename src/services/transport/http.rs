//! HTTP transport implementation for Koios.
//!
//! Requests go through a `reqwest` client wrapped in retry middleware. Transient failures
//! (network errors, 5xx, 408, 429) are retried according to the configured
//! [`RetryConfig`](crate::models::RetryConfig); client errors fail immediately.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{
	header::{ACCEPT, CONTENT_TYPE},
	Response, StatusCode,
};
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use std::{sync::Arc, time::Duration};

use crate::{
	models::{ApiToken, ContentType, HttpMethod, KoiosConfig, KoiosRequest, RequestBody},
	services::transport::{KoiosRetryStrategy, KoiosTransport, TransportError},
	utils::http::create_retryable_http_client,
};

/// Header Koios uses to explain why a request was refused
const DENY_REASON_HEADER: &str = "deny-reason";

/// HTTP transport client for the Koios REST API
///
/// The client is cheap to clone and can be shared across tasks.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// HTTP client with retry middleware
	client: ClientWithMiddleware,
	/// Base URL without trailing slash
	base_url: Arc<str>,
	/// Bearer token sent with every request when present
	api_token: Option<Arc<ApiToken>>,
}

impl HttpTransportClient {
	/// Creates a new HTTP transport client
	///
	/// # Arguments
	/// * `config` - Validated client configuration
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client instance or construction error
	pub fn new(config: &KoiosConfig) -> Result<Self, anyhow::Error> {
		let http_client = reqwest::ClientBuilder::new()
			.pool_idle_timeout(Duration::from_secs(90))
			.pool_max_idle_per_host(32)
			.timeout(config.request_timeout)
			.connect_timeout(config.request_timeout.min(Duration::from_secs(20)))
			.build()
			.context("Failed to create HTTP client")?;

		let client =
			create_retryable_http_client(&config.retry, http_client, Some(KoiosRetryStrategy));

		Ok(Self {
			client,
			base_url: Arc::from(config.base_url.trim_end_matches('/')),
			api_token: config.api_token.clone().map(Arc::new),
		})
	}

	/// Base URL requests are sent to
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn url_for(&self, request: &KoiosRequest) -> String {
		format!("{}/{}", self.base_url, request.endpoint.path())
	}
}

#[async_trait]
impl KoiosTransport for HttpTransportClient {
	/// Sends a request to the Koios service
	///
	/// # Arguments
	/// * `request` - Endpoint, query parameters and body of the call
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - Decoded JSON body or the final error
	async fn send_request(&self, request: &KoiosRequest) -> Result<Value, TransportError> {
		let url = self.url_for(request);
		let content_type = request.content_type();

		let mut builder = match request.method {
			HttpMethod::Get => self.client.get(&url),
			HttpMethod::Post => self.client.post(&url),
		}
		.query(&request.query)
		.header(ACCEPT, ContentType::Json.as_mime())
		.header(CONTENT_TYPE, content_type.as_mime());

		if let Some(token) = &self.api_token {
			builder = builder.bearer_auth(token.expose());
		}

		builder = match &request.body {
			RequestBody::Empty => builder,
			RequestBody::Json(body) => {
				let bytes = serde_json::to_vec(body).map_err(|e| {
					TransportError::request_serialization(
						format!("Failed to serialize body for {}", request.endpoint),
						Some(Box::new(e)),
					)
				})?;
				builder.body(bytes)
			}
			RequestBody::Cbor(bytes) => builder.body(bytes.clone()),
		};

		tracing::debug!(
			endpoint = %request.endpoint,
			offset = request.offset(),
			"Sending Koios request"
		);

		let response = builder.send().await.map_err(|e| {
			TransportError::network(format!("Failed to send request to {}", url), Some(Box::new(e)))
		})?;

		let status = response.status();
		if !status.is_success() {
			let message = extract_error_message(response).await;
			return Err(TransportError::http(status, url, message));
		}

		let body = response.bytes().await.map_err(|e| {
			TransportError::network(
				format!("Failed to read response from {}", url),
				Some(Box::new(e)),
			)
		})?;

		serde_json::from_slice(&body).map_err(|e| {
			TransportError::response_parse(
				format!("Invalid JSON from {}", url),
				Some(Box::new(e)),
			)
		})
	}
}

/// Builds a readable message for a failed response
///
/// Prefers the `message` field of a JSON error body, then the raw body, then the canonical
/// reason of the status. The `deny-reason` header is appended when present.
async fn extract_error_message(response: Response) -> String {
	let status = response.status();
	let deny_reason = response
		.headers()
		.get(DENY_REASON_HEADER)
		.and_then(|value| value.to_str().ok())
		.map(str::to_string);

	let text = response.text().await.unwrap_or_default();
	let message = error_message_from_body(status, &text);

	match deny_reason {
		Some(reason) => format!("{} (deny-reason: {})", message, reason),
		None => message,
	}
}

fn error_message_from_body(status: StatusCode, text: &str) -> String {
	let from_json = serde_json::from_str::<Value>(text).ok().and_then(|value| {
		value
			.get("message")
			.and_then(Value::as_str)
			.map(str::to_string)
	});

	match from_json {
		Some(message) => message,
		None if !text.trim().is_empty() => text.trim().to_string(),
		None => status
			.canonical_reason()
			.unwrap_or("Unknown error")
			.to_string(),
	}
}
