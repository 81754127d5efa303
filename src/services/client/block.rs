//! Block endpoints.

use serde_json::Value;

use super::{batch_request, KoiosClient};
use crate::{
	models::{Endpoint, Identifiers, KoiosRequest, Pagination},
	services::transport::{KoiosTransport, TransportError},
};

impl<T: KoiosTransport> KoiosClient<T> {
	/// Block summaries in ascending height order
	pub async fn blocks(&self, pagination: Pagination) -> Result<Vec<Value>, TransportError> {
		self.paginate(KoiosRequest::new(Endpoint::Blocks), pagination)
			.await
	}

	/// Detailed information about blocks
	pub async fn block_info(
		&self,
		block_hashes: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(
			Endpoint::BlockInfo,
			"_block_hashes",
			block_hashes,
		))
		.await
	}

	/// Transaction hashes included in blocks
	pub async fn block_txs(
		&self,
		block_hashes: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(
			Endpoint::BlockTxs,
			"_block_hashes",
			block_hashes,
		))
		.await
	}
}
