//! Transport layer for Koios requests.
//!
//! A transport turns a [`KoiosRequest`] into the decoded JSON answer of the service:
//!
//! - `error`: the error type shared by every transport
//! - `http`: HTTP implementation with retry middleware
//! - `retry`: classification of responses for the retry middleware

use async_trait::async_trait;
use serde_json::Value;

use crate::models::KoiosRequest;

mod error;
mod http;
mod retry;

pub use error::{is_transient_status, TransportError};
pub use http::HttpTransportClient;
pub use retry::KoiosRetryStrategy;

/// Executes single Koios requests
///
/// Implementations retry transient failures on their own; an error returned here is final
/// for the request.
#[async_trait]
pub trait KoiosTransport: Send + Sync {
	/// Sends the request and returns the decoded JSON body of the success response
	async fn send_request(&self, request: &KoiosRequest) -> Result<Value, TransportError>;
}
