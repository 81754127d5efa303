//! Stake account endpoints.

use serde_json::Value;

use super::{batch_request, id_list, KoiosClient};
use crate::{
	models::{BodyParams, Endpoint, Identifiers, KoiosRequest, Pagination, QueryParams},
	services::transport::{KoiosTransport, TransportError},
};

const STAKE_ADDRESSES: &str = "_stake_addresses";

impl<T: KoiosTransport> KoiosClient<T> {
	/// All registered stake addresses
	pub async fn account_list(&self, pagination: Pagination) -> Result<Vec<Value>, TransportError> {
		self.paginate(KoiosRequest::new(Endpoint::AccountList), pagination)
			.await
	}

	/// Status, balances and delegation of stake accounts
	pub async fn account_info(
		&self,
		stake_addresses: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(
			Endpoint::AccountInfo,
			STAKE_ADDRESSES,
			stake_addresses,
		))
		.await
	}

	/// Same as [`KoiosClient::account_info`], served from the Koios cache
	pub async fn account_info_cached(
		&self,
		stake_addresses: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(
			Endpoint::AccountInfoCached,
			STAKE_ADDRESSES,
			stake_addresses,
		))
		.await
	}

	/// UTxOs held by addresses of the stake accounts
	pub async fn account_utxos(
		&self,
		stake_addresses: impl Into<Identifiers>,
		extended: bool,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		let mut body = BodyParams::new();
		body.insert(STAKE_ADDRESSES, id_list(stake_addresses))
			.insert_flag("_extended", extended);
		self.paginate(
			KoiosRequest::new(Endpoint::AccountUtxos).with_body(body),
			pagination,
		)
		.await
	}

	/// Transactions of a stake account, optionally only after a block height
	pub async fn account_txs(
		&self,
		stake_address: &str,
		after_block_height: Option<u64>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		let mut query = QueryParams::new();
		query.insert("_stake_address", stake_address);
		if let Some(height) = after_block_height.filter(|h| *h > 0) {
			query.insert("_after_block_height", height);
		}
		self.paginate(
			KoiosRequest::new(Endpoint::AccountTxs).with_query(query),
			pagination,
		)
		.await
	}

	/// Reward history, optionally for a single epoch
	pub async fn account_rewards(
		&self,
		stake_addresses: impl Into<Identifiers>,
		epoch_no: Option<u32>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(with_epoch(
			Endpoint::AccountRewards,
			stake_addresses.into(),
			epoch_no,
		))
		.await
	}

	/// Registration, delegation and withdrawal certificates
	pub async fn account_updates(
		&self,
		stake_addresses: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(
			Endpoint::AccountUpdates,
			STAKE_ADDRESSES,
			stake_addresses,
		))
		.await
	}

	/// Payment addresses associated with the stake accounts
	pub async fn account_addresses(
		&self,
		stake_addresses: impl Into<Identifiers>,
		first_only: bool,
		empty: bool,
	) -> Result<Vec<Value>, TransportError> {
		let mut body = BodyParams::new();
		body.insert(STAKE_ADDRESSES, id_list(stake_addresses))
			.insert_flag("_first_only", first_only)
			.insert_flag("_empty", empty);
		self.fetch_records(KoiosRequest::new(Endpoint::AccountAddresses).with_body(body))
			.await
	}

	/// Native assets held by the stake accounts
	pub async fn account_assets(
		&self,
		stake_addresses: impl Into<Identifiers>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(
			batch_request(Endpoint::AccountAssets, STAKE_ADDRESSES, stake_addresses),
			pagination,
		)
		.await
	}

	/// Active stake history, optionally for a single epoch
	pub async fn account_history(
		&self,
		stake_addresses: impl Into<Identifiers>,
		epoch_no: Option<u32>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(with_epoch(
			Endpoint::AccountHistory,
			stake_addresses.into(),
			epoch_no,
		))
		.await
	}
}

fn with_epoch(endpoint: Endpoint, stake_addresses: Identifiers, epoch_no: Option<u32>) -> KoiosRequest {
	let mut body = BodyParams::new();
	body.insert(STAKE_ADDRESSES, stake_addresses.into_vec());
	if let Some(epoch_no) = epoch_no.filter(|e| *e > 0) {
		body.insert("_epoch_no", epoch_no);
	}
	KoiosRequest::new(endpoint).with_body(body)
}
