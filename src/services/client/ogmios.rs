use serde_json::Value;

use super::KoiosClient;
use crate::{
	models::{Endpoint, KoiosRequest, OgmiosRequest},
	services::transport::{KoiosTransport, TransportError},
};

impl<T: KoiosTransport> KoiosClient<T> {
	/// Forwards a JSON-RPC request to the Ogmios instance behind Koios
	///
	/// Only the state query methods Koios whitelists are accepted by the service. The
	/// JSON-RPC response object is returned unmodified.
	pub async fn ogmios(&self, request: OgmiosRequest) -> Result<Value, TransportError> {
		let body = serde_json::to_value(&request).map_err(|e| {
			TransportError::request_serialization(
				format!("Failed to serialize Ogmios request {}", request.method),
				Some(Box::new(e)),
			)
		})?;
		self.fetch_value(KoiosRequest::new(Endpoint::Ogmios).with_json(body))
			.await
	}
}
