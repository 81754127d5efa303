//! Transaction endpoints.

use serde_json::Value;

use super::{batch_request, id_list, KoiosClient};
use crate::{
	models::{BodyParams, Endpoint, Identifiers, KoiosRequest, Pagination},
	services::transport::{KoiosTransport, TransportError},
};

const TX_HASHES: &str = "_tx_hashes";

impl<T: KoiosTransport> KoiosClient<T> {
	/// Detailed information about transactions
	pub async fn tx_info(
		&self,
		tx_hashes: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(Endpoint::TxInfo, TX_HASHES, tx_hashes))
			.await
	}

	/// UTxO details by `<tx_hash>#<index>` reference
	pub async fn utxo_info(
		&self,
		utxo_refs: impl Into<Identifiers>,
		extended: bool,
	) -> Result<Vec<Value>, TransportError> {
		let mut body = BodyParams::new();
		body.insert("_utxo_refs", id_list(utxo_refs));
		if extended {
			body.insert_flag("_extended", true);
		}
		self.fetch_records(KoiosRequest::new(Endpoint::UtxoInfo).with_body(body))
			.await
	}

	/// Metadata attached to transactions
	pub async fn tx_metadata(
		&self,
		tx_hashes: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(Endpoint::TxMetadata, TX_HASHES, tx_hashes))
			.await
	}

	/// Every metadata label in use
	pub async fn tx_metalabels(&self, pagination: Pagination) -> Result<Vec<Value>, TransportError> {
		self.paginate(KoiosRequest::new(Endpoint::TxMetalabels), pagination)
			.await
	}

	/// Confirmation counts of transactions
	pub async fn tx_status(
		&self,
		tx_hashes: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(Endpoint::TxStatus, TX_HASHES, tx_hashes))
			.await
	}

	/// Submits a signed transaction in CBOR form
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - The transaction hash as a JSON string
	pub async fn submit_tx(&self, cbor: &[u8]) -> Result<Value, TransportError> {
		if cbor.is_empty() {
			return Err(TransportError::invalid_request("empty transaction"));
		}
		self.fetch_value(KoiosRequest::new(Endpoint::SubmitTx).with_cbor(cbor.to_vec()))
			.await
	}

	/// Submits a signed transaction given as hex encoded CBOR
	pub async fn submit_tx_hex(&self, cbor_hex: &str) -> Result<Value, TransportError> {
		let cbor = hex::decode(cbor_hex.trim()).map_err(|e| {
			TransportError::invalid_request(format!("transaction is not valid hex: {}", e))
		})?;
		self.submit_tx(&cbor).await
	}
}
