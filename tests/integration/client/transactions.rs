use serde_json::json;

use koios_client::{
	models::{ORDER_BY_BLOCK_HEIGHT_ASC, ORDER_PARAM},
	ContentType, Endpoint, KoiosRequest, RequestBody, TransportError,
};

use crate::integration::mocks::{client_with, MockKoiosTransport};

const TX_HASH: &str = "f144a8264acf4bdfe2e1241170969c930d64ab6b0996a4a45237b623f1dd670e";

#[tokio::test]
async fn test_tx_info_is_ordered() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::TxInfo
				&& request.query.get(ORDER_PARAM) == Some(ORDER_BY_BLOCK_HEIGHT_ASC)
				&& request.body == RequestBody::Json(json!({ "_tx_hashes": [TX_HASH] }))
		})
		.times(1)
		.returning(|_| Ok(json!([{ "tx_hash": TX_HASH }])));

	let txs = client_with(transport).tx_info(TX_HASH).await.unwrap();
	assert_eq!(txs[0]["tx_hash"], TX_HASH);
}

#[tokio::test]
async fn test_utxo_info_extended_only_when_set() {
	let mut transport = MockKoiosTransport::new();
	let mut sequence = mockall::Sequence::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.body == RequestBody::Json(json!({ "_utxo_refs": [format!("{}#0", TX_HASH)] }))
		})
		.times(1)
		.in_sequence(&mut sequence)
		.returning(|_| Ok(json!([])));
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.body
				== RequestBody::Json(json!({
					"_utxo_refs": [format!("{}#0", TX_HASH)],
					"_extended": "true"
				}))
		})
		.times(1)
		.in_sequence(&mut sequence)
		.returning(|_| Ok(json!([])));

	let client = client_with(transport);
	let utxo_ref = format!("{}#0", TX_HASH);
	client.utxo_info(&utxo_ref, false).await.unwrap();
	client.utxo_info(&utxo_ref, true).await.unwrap();
}

#[tokio::test]
async fn test_submit_tx_sends_cbor() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint.path() == "submittx"
				&& request.content_type() == ContentType::Cbor
				&& request.body == RequestBody::Cbor(vec![0x84, 0xa4, 0x00])
		})
		.times(2)
		.returning(|_| Ok(json!(TX_HASH)));

	let client = client_with(transport);
	assert_eq!(client.submit_tx(&[0x84, 0xa4, 0x00]).await.unwrap(), json!(TX_HASH));
	assert_eq!(client.submit_tx_hex("84a400").await.unwrap(), json!(TX_HASH));
}

#[tokio::test]
async fn test_submit_tx_hex_rejects_invalid_input() {
	let mut transport = MockKoiosTransport::new();
	transport.expect_send_request().never();

	let client = client_with(transport);
	assert!(matches!(
		client.submit_tx_hex("84a4zz").await,
		Err(TransportError::InvalidRequest(_))
	));
	assert!(matches!(
		client.submit_tx(&[]).await,
		Err(TransportError::InvalidRequest(_))
	));
}

#[tokio::test]
async fn test_tx_status_and_metadata() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			matches!(request.endpoint, Endpoint::TxStatus | Endpoint::TxMetadata)
				&& !request.query.contains(ORDER_PARAM)
		})
		.times(2)
		.returning(|_| Ok(json!([{ "tx_hash": TX_HASH, "num_confirmations": 3 }])));

	let client = client_with(transport);
	let status = client.tx_status(vec![TX_HASH]).await.unwrap();
	assert_eq!(status[0]["num_confirmations"], 3);
	client.tx_metadata(TX_HASH).await.unwrap();
}
