use serde_json::Value;

use super::KoiosClient;
use crate::{
	models::{Endpoint, KoiosRequest, QueryParams},
	services::transport::{KoiosTransport, TransportError},
};

impl<T: KoiosTransport> KoiosClient<T> {
	/// Epoch summaries; all epochs when `epoch_no` is `None`
	pub async fn epoch_info(
		&self,
		epoch_no: Option<u32>,
		include_next_epoch: bool,
	) -> Result<Vec<Value>, TransportError> {
		let mut request = epoch_request(Endpoint::EpochInfo, epoch_no);
		if include_next_epoch {
			let mut query = QueryParams::new();
			query.insert_flag("_include_next_epoch", true);
			request = request.with_query(query);
		}
		self.fetch_records(request).await
	}

	/// Protocol parameters; all epochs when `epoch_no` is `None`
	pub async fn epoch_params(&self, epoch_no: Option<u32>) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(epoch_request(Endpoint::EpochParams, epoch_no))
			.await
	}

	/// Block protocol version distribution
	pub async fn epoch_block_protocols(
		&self,
		epoch_no: Option<u32>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(epoch_request(Endpoint::EpochBlockProtocols, epoch_no))
			.await
	}
}

/// GET request with `_epoch_no` set when an epoch greater than 0 is given
pub(super) fn epoch_request(endpoint: Endpoint, epoch_no: Option<u32>) -> KoiosRequest {
	let mut query = QueryParams::new();
	if let Some(epoch_no) = epoch_no.filter(|e| *e > 0) {
		query.insert("_epoch_no", epoch_no);
	}
	KoiosRequest::new(endpoint).with_query(query)
}
