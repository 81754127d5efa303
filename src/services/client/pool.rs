//! Stake pool endpoints.

use serde_json::Value;

use super::{batch_request, epoch::epoch_request, KoiosClient};
use crate::{
	models::{Endpoint, Identifiers, KoiosRequest, Pagination, QueryParams},
	services::transport::{KoiosTransport, TransportError},
};

const POOL_BECH32: &str = "_pool_bech32";
const POOL_BECH32_IDS: &str = "_pool_bech32_ids";

impl<T: KoiosTransport> KoiosClient<T> {
	/// All registered pools
	pub async fn pool_list(&self, pagination: Pagination) -> Result<Vec<Value>, TransportError> {
		self.paginate(KoiosRequest::new(Endpoint::PoolList), pagination)
			.await
	}

	/// Current pool status and details
	pub async fn pool_info(
		&self,
		pool_ids: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(Endpoint::PoolInfo, POOL_BECH32_IDS, pool_ids))
			.await
	}

	/// Mark, set and go stake snapshots
	pub async fn pool_stake_snapshot(&self, pool_id: &str) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(pool_request(Endpoint::PoolStakeSnapshot, pool_id, None))
			.await
	}

	/// Current delegators of a pool
	pub async fn pool_delegators(
		&self,
		pool_id: &str,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(pool_request(Endpoint::PoolDelegators, pool_id, None), pagination)
			.await
	}

	/// Active stake delegators of a pool, for one epoch or all of them
	pub async fn pool_delegators_history(
		&self,
		pool_id: &str,
		epoch_no: Option<u32>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(
			pool_request(Endpoint::PoolDelegatorsHistory, pool_id, epoch_no),
			pagination,
		)
		.await
	}

	/// Blocks minted by a pool, for one epoch or all of them
	pub async fn pool_blocks(
		&self,
		pool_id: &str,
		epoch_no: Option<u32>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(pool_request(Endpoint::PoolBlocks, pool_id, epoch_no), pagination)
			.await
	}

	/// Per epoch pool performance
	pub async fn pool_history(
		&self,
		pool_id: &str,
		epoch_no: Option<u32>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(pool_request(Endpoint::PoolHistory, pool_id, epoch_no))
			.await
	}

	/// Pool updates, for a single pool when `pool_id` is given
	pub async fn pool_updates(
		&self,
		pool_id: Option<&str>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		let mut query = QueryParams::new();
		if let Some(pool_id) = pool_id.filter(|p| !p.is_empty()) {
			query.insert(POOL_BECH32, pool_id);
		}
		self.paginate(
			KoiosRequest::new(Endpoint::PoolUpdates).with_query(query),
			pagination,
		)
		.await
	}

	/// Pool registrations, for one epoch or all of them
	pub async fn pool_registrations(
		&self,
		epoch_no: Option<u32>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(epoch_request(Endpoint::PoolRegistrations, epoch_no), pagination)
			.await
	}

	/// Pool retirements, for one epoch or all of them
	pub async fn pool_retirements(
		&self,
		epoch_no: Option<u32>,
		pagination: Pagination,
	) -> Result<Vec<Value>, TransportError> {
		self.paginate(epoch_request(Endpoint::PoolRetirements, epoch_no), pagination)
			.await
	}

	/// Relays of every pool
	pub async fn pool_relays(&self, pagination: Pagination) -> Result<Vec<Value>, TransportError> {
		self.paginate(KoiosRequest::new(Endpoint::PoolRelays), pagination)
			.await
	}

	/// Off-chain metadata of pools
	pub async fn pool_metadata(
		&self,
		pool_ids: impl Into<Identifiers>,
	) -> Result<Vec<Value>, TransportError> {
		self.fetch_records(batch_request(
			Endpoint::PoolMetadata,
			POOL_BECH32_IDS,
			pool_ids,
		))
		.await
	}

	/// Pools announced as retiring
	pub async fn retiring_pools(&self) -> Result<Vec<Value>, TransportError> {
		let mut query = QueryParams::new();
		query.insert("pool_status", "eq.retiring");
		self.fetch_records(KoiosRequest::new(Endpoint::PoolList).with_query(query))
			.await
	}
}

fn pool_request(endpoint: Endpoint, pool_id: &str, epoch_no: Option<u32>) -> KoiosRequest {
	let mut query = QueryParams::new();
	query.insert(POOL_BECH32, pool_id);
	epoch_request(endpoint, epoch_no).with_query(query)
}
