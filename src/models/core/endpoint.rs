//! Catalogue of the Koios endpoints bound by this crate.

use std::fmt;

use super::HttpMethod;

/// Query parameter requesting ascending block height order
pub const ORDER_PARAM: &str = "order";
/// Value of [`ORDER_PARAM`] sent to ordered endpoints
pub const ORDER_BY_BLOCK_HEIGHT_ASC: &str = "block_height.asc";

/// Koios endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
	// Account
	AccountList,
	AccountInfo,
	AccountInfoCached,
	AccountUtxos,
	AccountTxs,
	AccountRewards,
	AccountUpdates,
	AccountAddresses,
	AccountAssets,
	AccountHistory,
	// Address
	AddressInfo,
	AddressUtxos,
	CredentialUtxos,
	AddressTxs,
	CredentialTxs,
	AddressAssets,
	// Asset
	AssetList,
	PolicyAssetList,
	AssetTokenRegistry,
	AssetInfo,
	AssetUtxos,
	AssetHistory,
	AssetAddresses,
	AssetNftAddress,
	PolicyAssetAddresses,
	PolicyAssetInfo,
	AssetSummary,
	AssetTxs,
	// Block
	Blocks,
	BlockInfo,
	BlockTxs,
	// Epoch
	EpochInfo,
	EpochParams,
	EpochBlockProtocols,
	// Network
	Tip,
	Genesis,
	Totals,
	ParamUpdates,
	ReserveWithdrawals,
	TreasuryWithdrawals,
	// Pool
	PoolList,
	PoolInfo,
	PoolStakeSnapshot,
	PoolDelegators,
	PoolDelegatorsHistory,
	PoolBlocks,
	PoolHistory,
	PoolUpdates,
	PoolRegistrations,
	PoolRetirements,
	PoolRelays,
	PoolMetadata,
	// Script
	ScriptInfo,
	NativeScriptList,
	PlutusScriptList,
	ScriptRedeemers,
	ScriptUtxos,
	DatumInfo,
	// Transactions
	TxInfo,
	UtxoInfo,
	TxMetadata,
	TxMetalabels,
	SubmitTx,
	TxStatus,
	// Ogmios
	Ogmios,
}

impl Endpoint {
	/// Path relative to the API base URL
	pub fn path(&self) -> &'static str {
		match self {
			Self::AccountList => "account_list",
			Self::AccountInfo => "account_info",
			Self::AccountInfoCached => "account_info_cached",
			Self::AccountUtxos => "account_utxos",
			Self::AccountTxs => "account_txs",
			Self::AccountRewards => "account_rewards",
			Self::AccountUpdates => "account_updates",
			Self::AccountAddresses => "account_addresses",
			Self::AccountAssets => "account_assets",
			Self::AccountHistory => "account_history",
			Self::AddressInfo => "address_info",
			Self::AddressUtxos => "address_utxos",
			Self::CredentialUtxos => "credential_utxos",
			Self::AddressTxs => "address_txs",
			Self::CredentialTxs => "credential_txs",
			Self::AddressAssets => "address_assets",
			Self::AssetList => "asset_list",
			Self::PolicyAssetList => "policy_asset_list",
			Self::AssetTokenRegistry => "asset_token_registry",
			Self::AssetInfo => "asset_info",
			Self::AssetUtxos => "asset_utxos",
			Self::AssetHistory => "asset_history",
			Self::AssetAddresses => "asset_addresses",
			Self::AssetNftAddress => "asset_nft_address",
			Self::PolicyAssetAddresses => "policy_asset_addresses",
			Self::PolicyAssetInfo => "policy_asset_info",
			Self::AssetSummary => "asset_summary",
			Self::AssetTxs => "asset_txs",
			Self::Blocks => "blocks",
			Self::BlockInfo => "block_info",
			Self::BlockTxs => "block_txs",
			Self::EpochInfo => "epoch_info",
			Self::EpochParams => "epoch_params",
			Self::EpochBlockProtocols => "epoch_block_protocols",
			Self::Tip => "tip",
			Self::Genesis => "genesis",
			Self::Totals => "totals",
			Self::ParamUpdates => "param_updates",
			Self::ReserveWithdrawals => "reserve_withdrawals",
			Self::TreasuryWithdrawals => "treasury_withdrawals",
			Self::PoolList => "pool_list",
			Self::PoolInfo => "pool_info",
			Self::PoolStakeSnapshot => "pool_stake_snapshot",
			Self::PoolDelegators => "pool_delegators",
			Self::PoolDelegatorsHistory => "pool_delegators_history",
			Self::PoolBlocks => "pool_blocks",
			Self::PoolHistory => "pool_history",
			Self::PoolUpdates => "pool_updates",
			Self::PoolRegistrations => "pool_registrations",
			Self::PoolRetirements => "pool_retirements",
			Self::PoolRelays => "pool_relays",
			Self::PoolMetadata => "pool_metadata",
			Self::ScriptInfo => "script_info",
			Self::NativeScriptList => "native_script_list",
			Self::PlutusScriptList => "plutus_script_list",
			Self::ScriptRedeemers => "script_redeemers",
			Self::ScriptUtxos => "script_utxos",
			Self::DatumInfo => "datum_info",
			Self::TxInfo => "tx_info",
			Self::UtxoInfo => "utxo_info",
			Self::TxMetadata => "tx_metadata",
			Self::TxMetalabels => "tx_metalabels",
			Self::SubmitTx => "submittx",
			Self::TxStatus => "tx_status",
			Self::Ogmios => "ogmios",
		}
	}

	/// HTTP method Koios expects for the endpoint
	pub fn method(&self) -> HttpMethod {
		match self {
			Self::AccountInfo
			| Self::AccountInfoCached
			| Self::AccountUtxos
			| Self::AccountRewards
			| Self::AccountUpdates
			| Self::AccountAddresses
			| Self::AccountAssets
			| Self::AccountHistory
			| Self::AddressInfo
			| Self::AddressUtxos
			| Self::CredentialUtxos
			| Self::AddressTxs
			| Self::CredentialTxs
			| Self::AddressAssets
			| Self::AssetInfo
			| Self::AssetUtxos
			| Self::BlockInfo
			| Self::BlockTxs
			| Self::PoolInfo
			| Self::PoolMetadata
			| Self::ScriptInfo
			| Self::DatumInfo
			| Self::TxInfo
			| Self::UtxoInfo
			| Self::TxMetadata
			| Self::SubmitTx
			| Self::TxStatus
			| Self::Ogmios => HttpMethod::Post,
			_ => HttpMethod::Get,
		}
	}

	/// Whether multi-page results must be requested in ascending block height order
	pub fn is_ordered(&self) -> bool {
		matches!(
			self,
			Self::Blocks
				| Self::AccountTxs
				| Self::AssetTxs
				| Self::PoolBlocks
				| Self::PoolRegistrations
				| Self::PoolRetirements
				| Self::ScriptUtxos
				| Self::UtxoInfo
				| Self::TxInfo
				| Self::AccountUtxos
				| Self::AddressUtxos
				| Self::CredentialUtxos
				| Self::AddressTxs
				| Self::CredentialTxs
				| Self::AssetUtxos
		)
	}
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.path())
	}
}
