use serde_json::json;

use koios_client::{models::ORDER_PARAM, Endpoint, HttpMethod, KoiosRequest};

use crate::integration::mocks::{client_with, MockKoiosTransport};

#[tokio::test]
async fn test_epoch_info_parameters() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::EpochInfo
				&& request.method == HttpMethod::Get
				&& request.query.get("_epoch_no") == Some("320")
				&& request.query.get("_include_next_epoch") == Some("true")
		})
		.times(1)
		.returning(|_| Ok(json!([{ "epoch_no": 320 }])));

	let info = client_with(transport)
		.epoch_info(Some(320), true)
		.await
		.unwrap();
	assert_eq!(info[0]["epoch_no"], 320);
}

#[tokio::test]
async fn test_epoch_params_without_epoch_sends_no_query() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			request.endpoint == Endpoint::EpochParams && request.query.is_empty()
		})
		.times(1)
		.returning(|_| Ok(json!([])));

	client_with(transport).epoch_params(None).await.unwrap();
}

#[tokio::test]
async fn test_network_endpoints_are_single_shot() {
	let mut transport = MockKoiosTransport::new();
	transport
		.expect_send_request()
		.withf(|request: &KoiosRequest| {
			matches!(
				request.endpoint,
				Endpoint::Tip | Endpoint::Genesis | Endpoint::ParamUpdates | Endpoint::Totals
			) && !request.query.contains(ORDER_PARAM)
		})
		.times(4)
		.returning(|_| Ok(json!([{}])));

	let client = client_with(transport);
	client.tip().await.unwrap();
	client.genesis().await.unwrap();
	client.param_updates().await.unwrap();
	client.totals(Some(0)).await.unwrap();
}
