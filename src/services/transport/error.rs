//! Transport error types.
//!
//! Every failure of a Koios call ends up as a [`TransportError`]. Errors that were caused
//! by a transient condition (network failures, 5xx, 408, 429) report
//! [`TransportError::is_retryable`] as true: the retry budget was spent and the caller may
//! try again later. Client errors are never retried.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::error;

use crate::models::Endpoint;

#[derive(Debug, Error)]
pub enum TransportError {
	/// The service answered with a non-success status
	#[error("HTTP error {status} from {url}: {message}")]
	Http {
		status: StatusCode,
		url: String,
		message: String,
	},

	/// The request could not be delivered or the response could not be read
	#[error("Network error: {message}")]
	Network {
		message: String,
		#[source]
		source: Option<Box<dyn std::error::Error + Send + Sync>>,
	},

	/// A success response whose body is not valid JSON
	#[error("Failed to parse response: {message}")]
	ResponseParse {
		message: String,
		#[source]
		source: Option<Box<dyn std::error::Error + Send + Sync>>,
	},

	/// The request body could not be serialized
	#[error("Failed to serialize request: {message}")]
	RequestSerialization {
		message: String,
		#[source]
		source: Option<Box<dyn std::error::Error + Send + Sync>>,
	},

	/// Valid JSON with a shape the endpoint never returns
	#[error("Unexpected response from {endpoint}: expected {expected}")]
	UnexpectedResponse {
		endpoint: Endpoint,
		expected: &'static str,
	},

	/// Caller input rejected before anything was sent
	#[error("Invalid request: {0}")]
	InvalidRequest(String),
}

/// Whether a status code is worth another attempt
pub fn is_transient_status(status: StatusCode) -> bool {
	status.is_server_error()
		|| status == StatusCode::REQUEST_TIMEOUT
		|| status == StatusCode::TOO_MANY_REQUESTS
}

impl TransportError {
	/// Creates an HTTP status error and logs it
	pub fn http(status: StatusCode, url: impl Into<String>, message: impl Into<String>) -> Self {
		let error = Self::Http {
			status,
			url: url.into(),
			message: message.into(),
		};
		error!("{}", error);
		error
	}

	/// Creates a network error and logs it
	pub fn network(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync>>,
	) -> Self {
		let error = Self::Network {
			message: message.into(),
			source,
		};
		error!("{}", error);
		error
	}

	/// Creates a response parse error and logs it
	pub fn response_parse(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync>>,
	) -> Self {
		let error = Self::ResponseParse {
			message: message.into(),
			source,
		};
		error!("{}", error);
		error
	}

	/// Creates a request serialization error and logs it
	pub fn request_serialization(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync>>,
	) -> Self {
		let error = Self::RequestSerialization {
			message: message.into(),
			source,
		};
		error!("{}", error);
		error
	}

	/// Creates an unexpected response error and logs it
	pub fn unexpected_response(endpoint: Endpoint, expected: &'static str) -> Self {
		let error = Self::UnexpectedResponse { endpoint, expected };
		error!("{}", error);
		error
	}

	/// Creates an invalid request error and logs it
	pub fn invalid_request(message: impl Into<String>) -> Self {
		let error = Self::InvalidRequest(message.into());
		error!("{}", error);
		error
	}

	/// HTTP status of the failed call, if the service answered
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Http { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// True when the failure was transient and the call may succeed later
	pub fn is_retryable(&self) -> bool {
		match self {
			Self::Http { status, .. } => is_transient_status(*status),
			Self::Network { .. } => true,
			_ => false,
		}
	}
}
