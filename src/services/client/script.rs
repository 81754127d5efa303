//! Script and datum endpoints.

use serde_json::Value;

use super::{batch_request, KoiosClient};
use crate::{
	models::{Endpoint, Identifiers, KoiosRequest, Pagination, QueryParams},
	services::transport::{KoiosTransport, TransportError},
};

impl<T: KoiosTransport> KoiosClient<T> {
	/// Script details by script hash
	pub async fn script_info(
		&self,
		script_hashes: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(
			Endpoint::ScriptInfo,
			"_script_hashes",
			script_hashes,
		))
		.await
	}

	pub async fn native_script_list(
		&self,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(KoiosRequest::new(Endpoint::NativeScriptList), pagination)
			.await
	}

	pub async fn plutus_script_list(
		&self,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(KoiosRequest::new(Endpoint::PlutusScriptList), pagination)
			.await
	}

	/// Redeemers of a script
	pub async fn script_redeemers(&self, script_hash: &str) -> Result<Vec<Value>, TransportError> {
		let mut query = QueryParams::new();
		query.insert("_script_hash", script_hash);
		self.fetch_records(KoiosRequest::new(Endpoint::ScriptRedeemers).with_query(query))
			.await
	}

	/// UTxOs locked by a script
	///
	/// Anything from the first `.` onwards is dropped, so an asset style
	/// `<hash>.<name>` identifier can be passed as is.
	pub async fn script_utxos(
		&self,
		script_hash: &str,
		extended: bool,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		let hash = script_hash.split('.').next().unwrap_or(script_hash);
		let mut query = QueryParams::new();
		query
			.insert("_script_hash", hash)
			.insert_flag("_extended", extended);
		self.paginate(
			KoiosRequest::new(Endpoint::ScriptUtxos).with_query(query),
			pagination,
		)
		.await
	}

	/// Datum values by datum hash
	pub async fn datum_info(
		&self,
		datum_hashes: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(
			Endpoint::DatumInfo,
			"_datum_hashes",
			datum_hashes,
		))
		.await
	}
}
