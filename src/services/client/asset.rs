//! Native asset endpoints.
//!
//! Assets are identified by `<policy_id>.<asset_name_hex>` strings; the name part may be
//! omitted for a policy's nameless asset. Strings that do not parse are rejected before
//! any request is sent.

use serde_json::Value;

use super::KoiosClient;
use crate::{
	models::{AssetId, BodyParams, Endpoint, Identifiers, KoiosRequest, Pagination, QueryParams},
	services::transport::{KoiosTransport, TransportError},
};

const ASSET_POLICY: &str = "_asset_policy";
const ASSET_NAME: &str = "_asset_name";

impl<T: KoiosTransport> KoiosClient<T> {
	/// All native assets, optionally restricted to one policy
	pub async fn asset_list(
		&self,
		policy_id: Option<&str>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		let mut query = QueryParams::new();
		if let Some(policy_id) = policy_id.filter(|p| !p.is_empty()) {
			query.insert("policy_id", format!("eq.{}", policy_id));
		}
		self.paginate(
			KoiosRequest::new(Endpoint::AssetList).with_query(query),
			pagination,
		)
		.await
	}

	/// Assets under a policy, with total supply
	pub async fn policy_asset_list(
		&self,
		policy_id: &str,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(policy_request(Endpoint::PolicyAssetList, policy_id), pagination)
			.await
	}

	/// Assets registered through the token registry
	pub async fn asset_token_registry(
		&self,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(KoiosRequest::new(Endpoint::AssetTokenRegistry), pagination)
			.await
	}

	/// Minting details and registry metadata of assets
	pub async fn asset_info(
		&self,
		assets: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		let mut body = BodyParams::new();
		body.insert("_asset_list", asset_list_body(assets.into())?);
		self.fetch_records(KoiosRequest::new(Endpoint::AssetInfo).with_body(body))
			.await
	}

	/// UTxOs holding any of the assets
	pub async fn asset_utxos(
		&self,
		assets: impl Into<Identifiers>,
		extended: bool,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		let mut body = BodyParams::new();
		body.insert("_asset_list", asset_list_body(assets.into())?)
			.insert_flag("_extended", extended);
		self.paginate(
			KoiosRequest::new(Endpoint::AssetUtxos).with_body(body),
			pagination,
		)
		.await
	}

	/// Mint and burn history of a policy, or of a single asset when a name is given
	pub async fn asset_history(
		&self,
		policy_id: &str,
		asset_name: Option<&str>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(
			named_asset_request(Endpoint::AssetHistory, policy_id, asset_name),
			pagination,
		)
		.await
	}

	/// Addresses holding an asset, with quantities
	pub async fn asset_addresses(
		&self,
		policy_id: &str,
		asset_name: Option<&str>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(
			named_asset_request(Endpoint::AssetAddresses, policy_id, asset_name),
			pagination,
		)
		.await
	}

	/// Address currently holding an NFT
	pub async fn asset_nft_address(
		&self,
		policy_id: &str,
		asset_name: &str,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		let mut query = QueryParams::new();
		query.insert(ASSET_POLICY, policy_id).insert(ASSET_NAME, asset_name);
		self.paginate(
			KoiosRequest::new(Endpoint::AssetNftAddress).with_query(query),
			pagination,
		)
		.await
	}

	/// Addresses holding assets of a policy, with quantities per asset
	pub async fn policy_asset_addresses(
		&self,
		policy_id: &str,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(
			policy_request(Endpoint::PolicyAssetAddresses, policy_id),
			pagination,
		)
		.await
	}

	/// Information on every asset of a policy
	pub async fn policy_asset_info(
		&self,
		policy_id: &str,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(policy_request(Endpoint::PolicyAssetInfo, policy_id), pagination)
			.await
	}

	/// Transaction and wallet counts of an asset
	pub async fn asset_summary(
		&self,
		policy_id: &str,
		asset_name: &str,
	) -> Result<Vec<Value>, TransportError> {
		let mut query = QueryParams::new();
		query.insert(ASSET_POLICY, policy_id).insert(ASSET_NAME, asset_name);
		self.fetch_records(KoiosRequest::new(Endpoint::AssetSummary).with_query(query))
			.await
	}

	/// Transactions involving an asset after a block height
	///
	/// With `history` set, every transaction is returned instead of only those touching
	/// the current holders.
	pub async fn asset_txs(
		&self,
		policy_id: &str,
		asset_name: &str,
		after_block_height: u64,
		history: bool,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		let mut query = QueryParams::new();
		query
			.insert(ASSET_POLICY, policy_id)
			.insert(ASSET_NAME, asset_name)
			.insert("_after_block_height", after_block_height)
			.insert_flag("_history", history);
		self.paginate(
			KoiosRequest::new(Endpoint::AssetTxs).with_query(query),
			pagination,
		)
		.await
	}
}

/// `[[policy_id, asset_name], ...]` list for asset batch bodies
fn asset_list_body(assets: Identifiers) -> Result<Value, TransportError> {
	assets
		.into_vec()
		.iter()
		.map(|asset| {
			asset
				.parse::<AssetId>()
				.map(|id| Value::from(id.to_pair().to_vec()))
				.map_err(|e| TransportError::invalid_request(e.to_string()))
		})
		.collect::<Result<Vec<_>, _>>()
		.map(Value::Array)
}

fn policy_request(endpoint: Endpoint, policy_id: &str) -> KoiosRequest {
	let mut query = QueryParams::new();
	query.insert(ASSET_POLICY, policy_id);
	KoiosRequest::new(endpoint).with_query(query)
}

fn named_asset_request(endpoint: Endpoint, policy_id: &str, asset_name: Option<&str>) -> KoiosRequest {
	let mut query = QueryParams::new();
	query.insert(ASSET_POLICY, policy_id);
	if let Some(name) = asset_name.filter(|n| !n.is_empty()) {
		query.insert(ASSET_NAME, name);
	}
	KoiosRequest::new(endpoint).with_query(query)
}
