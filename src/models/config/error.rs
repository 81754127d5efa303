//! Configuration error types.
//!
//! This module defines the error types that can occur during configuration
//! loading and validation.

use thiserror::Error;
use tracing::error;

/// Errors that can occur during configuration operations
#[derive(Debug, Error)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// Configuration validation failed
	#[error("Validation error: {0}")]
	ValidationError(String),

	/// Failed to parse a configuration value or file
	#[error("Parse error: {0}")]
	ParseError(String),

	/// File system error during configuration loading
	#[error("File error: {0}")]
	FileError(String),
}

impl ConfigError {
	/// Create a new validation error and log it
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error);
		error
	}

	/// Create a new parse error and log it
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!("{}", error);
		error
	}

	/// Create a new file error and log it
	pub fn file_error(msg: impl Into<String>) -> Self {
		let error = Self::FileError(msg.into());
		error!("{}", error);
		error
	}
}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error(err.to_string())
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::parse_error(err.to_string())
	}
}

impl From<dotenvy::Error> for ConfigError {
	fn from(err: dotenvy::Error) -> Self {
		match err {
			dotenvy::Error::Io(io) => io.into(),
			other => Self::parse_error(other.to_string()),
		}
	}
}
