use serde_json::{json, Value};

use koios_client::{
	models::{ORDER_BY_BLOCK_HEIGHT_ASC, ORDER_PARAM},
	Endpoint, HttpMethod, KoiosRequest, Pagination, RequestBody,
};

use crate::integration::mocks::{client_with, offset_of, MockKoiosTransport, TEST_PAGE_SIZE};

const POOL: &str = "pool155efqn9xpcf73pphkk88cmlkdwx4ulkg606tne970qswczg3asc";

#[tokio::test]
async fn test_pool_list_fetches_all_pages() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::PoolList && !request.query.contains(ORDER_PARAM)
		})
		.times(3)
		.returning(|request| {
			let len = if offset_of(request) < 20 { TEST_PAGE_SIZE } else { 0 };
			Ok(Value::Array(vec![json!({ "pool_id_bech32": POOL }); len]))
		});

	let pools = client_with(transport)
		.pool_list(Pagination::all())
		.await
		.unwrap();
	assert_eq!(pools.len(), 20);
}

#[tokio::test]
async fn test_pool_blocks_query() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::PoolBlocks
				&& request.query.get("_pool_bech32") == Some(POOL)
				&& request.query.get("_epoch_no") == Some("420")
				&& request.query.get(ORDER_PARAM) == Some(ORDER_BY_BLOCK_HEIGHT_ASC)
		})
		.times(1)
		.returning(|_| Ok(json!([{ "block_height": 1 }])));

	client_with(transport)
		.pool_blocks(POOL, Some(420), Pagination::all())
		.await
		.unwrap();
}

#[tokio::test]
async fn test_pool_info_batch_body() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::PoolInfo
				&& request.method == HttpMethod::Post
				&& request.body == RequestBody::Json(json!({ "_pool_bech32_ids": [POOL] }))
		})
		.times(1)
		.returning(|_| Ok(json!([{ "pool_status": "registered" }])));

	client_with(transport).pool_info(POOL).await.unwrap();
}

#[tokio::test]
async fn test_retiring_pools_filters_pool_list() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::PoolList
				&& request.query.get("pool_status") == Some("eq.retiring")
				&& offset_of(request) == 0
		})
		.times(1)
		.returning(|_| Ok(json!([{ "pool_status": "retiring" }])));

	let pools = client_with(transport).retiring_pools().await.unwrap();
	assert_eq!(pools.len(), 1);
}

#[tokio::test]
async fn test_pool_updates_without_pool_id() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::PoolUpdates && request.query.is_empty()
		})
		.times(1)
		.returning(|_| Ok(json!([])));

	client_with(transport)
		.pool_updates(None, Pagination::all())
		.await
		.unwrap();
}

#[tokio::test]
async fn test_pool_registrations_ordered_with_epoch() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::PoolRegistrations
				&& request.query.get("_epoch_no") == Some("300")
				&& request.query.get(ORDER_PARAM) == Some(ORDER_BY_BLOCK_HEIGHT_ASC)
		})
		.times(1)
		.returning(|_| Ok(json!([])));

	client_with(transport)
		.pool_registrations(Some(300), Pagination::all())
		.await
		.unwrap();
}
