use serde_json::json;

use koios_client::{
	models::{ORDER_BY_BLOCK_HEIGHT_ASC, ORDER_PARAM},
	Endpoint, KoiosRequest, Pagination, RequestBody,
};

use crate::integration::mocks::{client_with, MockKoiosTransport};

const SCRIPT_HASH: &str = "d8480dc869b94b80e81ec91b0abe307279311fe0e7001a9488f61ff8";

#[tokio::test]
async fn test_script_utxos_strips_asset_name() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::ScriptUtxos
				&& request.query.get("_script_hash") == Some(SCRIPT_HASH)
				&& request.query.get("_extended") == Some("true")
				&& request.query.get(ORDER_PARAM) == Some(ORDER_BY_BLOCK_HEIGHT_ASC)
		})
		.times(2)
		.returning(|_| Ok(json!([{ "tx_hash": "abc" }])));

	let client = client_with(transport);
	client
		.script_utxos(&format!("{}.424f4f4b", SCRIPT_HASH), true, Pagination::all())
		.await
		.unwrap();
	client
		.script_utxos(SCRIPT_HASH, true, Pagination::all())
		.await
		.unwrap();
}

#[tokio::test]
async fn test_datum_info_batch_body() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::DatumInfo
				&& request.body == RequestBody::Json(json!({ "_datum_hashes": ["818ee3db"] }))
		})
		.times(1)
		.returning(|_| Ok(json!([{ "value": {} }])));

	client_with(transport).datum_info("818ee3db").await.unwrap();
}

#[tokio::test]
async fn test_script_redeemers_query() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::ScriptRedeemers
				&& request.query.get("_script_hash") == Some(SCRIPT_HASH)
		})
		.times(1)
		.returning(|_| Ok(json!([])));

	client_with(transport)
		.script_redeemers(SCRIPT_HASH)
		.await
		.unwrap();
}
