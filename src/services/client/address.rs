//! Address and payment credential endpoints.

use serde_json::Value;

use super::{batch_request, KoiosClient};
use crate::{
	models::{BodyParams, Endpoint, Identifiers, KoiosRequest, Pagination},
	services::transport::{KoiosTransport, TransportError},
};

const ADDRESSES: &str = "_addresses";
const PAYMENT_CREDENTIALS: &str = "_payment_credentials";

impl<T: KoiosTransport> KoiosClient<T> {
	/// Balance, stake address and UTxO set of addresses
	pub async fn address_info(
		&self,
		addresses: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(Endpoint::AddressInfo, ADDRESSES, addresses))
			.await
	}

	/// UTxOs of addresses
	pub async fn address_utxos(
		&self,
		addresses: impl Into<Identifiers>,
		extended: bool,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(
			extended_request(Endpoint::AddressUtxos, ADDRESSES, addresses.into(), extended),
			pagination,
		)
		.await
	}

	/// UTxOs of payment credentials
	pub async fn credential_utxos(
		&self,
		credentials: impl Into<Identifiers>,
		extended: bool,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(
			extended_request(
				Endpoint::CredentialUtxos,
				PAYMENT_CREDENTIALS,
				credentials.into(),
				extended,
			),
			pagination,
		)
		.await
	}

	/// Transactions touching addresses, optionally only after a block height
	pub async fn address_txs(
		&self,
		addresses: impl Into<Identifiers>,
		after_block_height: Option<u64>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(
			txs_request(
				Endpoint::AddressTxs,
				ADDRESSES,
				addresses.into(),
				after_block_height,
			),
			pagination,
		)
		.await
	}

	/// Transactions touching payment credentials, optionally only after a block height
	pub async fn credential_txs(
		&self,
		credentials: impl Into<Identifiers>,
		after_block_height: Option<u64>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(
			txs_request(
				Endpoint::CredentialTxs,
				PAYMENT_CREDENTIALS,
				credentials.into(),
				after_block_height,
			),
			pagination,
		)
		.await
	}

	/// Native assets held by addresses
	pub async fn address_assets(
		&self,
		addresses: impl Into<Identifiers>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(
			batch_request(Endpoint::AddressAssets, ADDRESSES, addresses),
			pagination,
		)
		.await
	}
}

fn extended_request(
	endpoint: Endpoint,
	key: &str,
	ids: Identifiers,
	extended: bool,
) -> KoiosRequest {
	let mut body = BodyParams::new();
	body.insert(key, ids.into_vec())
		.insert_flag("_extended", extended);
	KoiosRequest::new(endpoint).with_body(body)
}

fn txs_request(
	endpoint: Endpoint,
	key: &str,
	ids: Identifiers,
	after_block_height: Option<u64>,
) -> KoiosRequest {
	let mut body = BodyParams::new();
	body.insert(key, ids.into_vec());
	if let Some(height) = after_block_height.filter(|h| *h > 0) {
		body.insert("_after_block_height", height);
	}
	KoiosRequest::new(endpoint).with_body(body)
}
