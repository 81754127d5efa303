//! Network wide endpoints.

use serde_json::Value;

use super::{epoch::epoch_request, KoiosClient};
use crate::{
	models::{Endpoint, KoiosRequest, Pagination},
	services::transport::{KoiosTransport, TransportError},
};

impl<T: KoiosTransport> KoiosClient<T> {
	/// Current chain tip
	pub async fn tip(&self) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(KoiosRequest::new(Endpoint::Tip)).await
	}

	/// Genesis parameters
	pub async fn genesis(&self) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(KoiosRequest::new(Endpoint::Genesis))
			.await
	}

	/// Circulating supply, treasury and reserves; all epochs when `epoch_no` is `None`
	pub async fn totals(&self, epoch_no: Option<u32>) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(epoch_request(Endpoint::Totals, epoch_no))
			.await
	}

	/// Parameter update proposals
	pub async fn param_updates(&self) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(KoiosRequest::new(Endpoint::ParamUpdates))
			.await
	}

	pub async fn reserve_withdrawals(
		&self,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(KoiosRequest::new(Endpoint::ReserveWithdrawals), pagination)
			.await
	}

	pub async fn treasury_withdrawals(
		&self,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(KoiosRequest::new(Endpoint::TreasuryWithdrawals), pagination)
			.await
	}
}
