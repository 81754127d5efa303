use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

use koios_client::{
	Endpoint, HttpTransportClient, KoiosClient, KoiosConfig, KoiosRequest, KoiosTransport,
	Pagination, RetryConfig, TransportError,
};

fn test_config(base_url: &str) -> KoiosConfig {
	KoiosConfig::default()
		.with_base_url(base_url)
		.with_retry(RetryConfig::fixed(2, Duration::from_millis(1)))
		.with_request_timeout(Duration::from_secs(5))
}

fn create_transport(base_url: &str) -> HttpTransportClient {
	HttpTransportClient::new(&test_config(base_url)).unwrap()
}

#[tokio::test]
async fn test_get_request_headers_and_ordering() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/blocks")
		.match_header("accept", "application/json")
		.match_header("content-type", "application/json")
		.match_header("authorization", Matcher::Missing)
		.match_query(Matcher::UrlEncoded(
			"order".into(),
			"block_height.asc".into(),
		))
		.with_status(200)
		.with_body(r#"[{"block_height": 1}]"#)
		.expect(1)
		.create_async()
		.await;

	let transport = create_transport(&server.url());
	let response = transport
		.send_request(&KoiosRequest::new(Endpoint::Blocks))
		.await
		.unwrap();

	assert_eq!(response, json!([{ "block_height": 1 }]));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/tip")
		.match_header("authorization", "Bearer secret-token")
		.with_status(200)
		.with_body("[]")
		.expect(1)
		.create_async()
		.await;

	let config = test_config(&server.url()).with_api_token("secret-token");
	let client = KoiosClient::new(config).unwrap();
	client.tip().await.unwrap();

	mock.assert_async().await;
}

#[tokio::test]
async fn test_post_body_is_json() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/account_info")
		.match_header("content-type", "application/json")
		.match_body(Matcher::Json(json!({ "_stake_addresses": ["stake1u9"] })))
		.with_status(200)
		.with_body(r#"[{"status": "registered"}]"#)
		.expect(1)
		.create_async()
		.await;

	let client = KoiosClient::new(test_config(&server.url())).unwrap();
	let info = client.account_info("stake1u9").await.unwrap();

	assert_eq!(info[0]["status"], "registered");
	mock.assert_async().await;
}

#[tokio::test]
async fn test_submit_tx_sends_raw_cbor_and_accepts_202() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/submittx")
		.match_header("content-type", "application/cbor")
		.with_status(202)
		.with_body(r#""f144a8264acf4bdfe2e1241170969c930d64ab6b0996a4a45237b623f1dd670e""#)
		.expect(1)
		.create_async()
		.await;

	let client = KoiosClient::new(test_config(&server.url())).unwrap();
	let tx_hash = client.submit_tx_hex("84a400").await.unwrap();

	assert_eq!(
		tx_hash,
		json!("f144a8264acf4bdfe2e1241170969c930d64ab6b0996a4a45237b623f1dd670e")
	);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_transient_failure_then_success() {
	let mut server = Server::new_async().await;
	let failing = server
		.mock("GET", "/tip")
		.with_status(503)
		.expect(1)
		.create_async()
		.await;
	let succeeding = server
		.mock("GET", "/tip")
		.with_status(200)
		.with_body(r#"[{"block_no": 42}]"#)
		.expect(1)
		.create_async()
		.await;

	let client = KoiosClient::new(test_config(&server.url())).unwrap();
	let tip = client.tip().await.unwrap();

	assert_eq!(tip, vec![json!({ "block_no": 42 })]);
	failing.assert_async().await;
	succeeding.assert_async().await;
}

#[tokio::test]
async fn test_retries_are_bounded() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/pool_list")
		.with_status(503)
		.with_body("service unavailable")
		.expect(3)
		.create_async()
		.await;

	let client = KoiosClient::new(test_config(&server.url())).unwrap();
	let error = client.pool_list(Pagination::all()).await.unwrap_err();

	assert_eq!(error.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
	assert!(error.is_retryable());
	assert!(error.to_string().contains("service unavailable"));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_rate_limit_is_retried() {
	let mut server = Server::new_async().await;
	let limited = server
		.mock("GET", "/genesis")
		.with_status(429)
		.expect(1)
		.create_async()
		.await;
	let ok = server
		.mock("GET", "/genesis")
		.with_status(200)
		.with_body("[{}]")
		.expect(1)
		.create_async()
		.await;

	let client = KoiosClient::new(test_config(&server.url())).unwrap();
	client.genesis().await.unwrap();

	limited.assert_async().await;
	ok.assert_async().await;
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/tx_info")
		.match_query(Matcher::Any)
		.with_status(400)
		.with_header("deny-reason", "invalid hash")
		.with_body(r#"{"code": "22P02", "message": "invalid input syntax"}"#)
		.expect(1)
		.create_async()
		.await;

	let client = KoiosClient::new(test_config(&server.url())).unwrap();
	let error = client.tx_info("nothex").await.unwrap_err();

	match &error {
		TransportError::Http {
			status, message, ..
		} => {
			assert_eq!(*status, StatusCode::BAD_REQUEST);
			assert_eq!(message, "invalid input syntax (deny-reason: invalid hash)");
		}
		other => panic!("unexpected error: {}", other),
	}
	assert!(!error.is_retryable());
	mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_json_is_a_parse_error() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/tip")
		.with_status(200)
		.with_body("<html>maintenance</html>")
		.expect(1)
		.create_async()
		.await;

	let client = KoiosClient::new(test_config(&server.url())).unwrap();
	let error = client.tip().await.unwrap_err();

	assert!(matches!(error, TransportError::ResponseParse { .. }));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
	let client = KoiosClient::new(test_config("http://127.0.0.1:1")).unwrap();
	let error = client.tip().await.unwrap_err();

	assert!(matches!(error, TransportError::Network { .. }));
	assert!(error.is_retryable());
}

#[tokio::test]
async fn test_pagination_over_http() {
	let mut server = Server::new_async().await;
	let config = test_config(&server.url()).with_page_size(2);

	let first = server
		.mock("GET", "/asset_token_registry")
		.with_status(200)
		.with_body(r#"[{"id": 0}, {"id": 1}]"#)
		.expect(1)
		.create_async()
		.await;
	let second = server
		.mock("GET", "/asset_token_registry")
		.match_query(Matcher::UrlEncoded("offset".into(), "2".into()))
		.with_status(200)
		.with_body(r#"[{"id": 2}]"#)
		.expect(1)
		.create_async()
		.await;

	let client = KoiosClient::new(config).unwrap();
	let assets = client.asset_token_registry(Pagination::all()).await.unwrap();

	assert_eq!(
		assets,
		vec![json!({"id": 0}), json!({"id": 1}), json!({"id": 2})]
	);
	first.assert_async().await;
	second.assert_async().await;
}

#[tokio::test]
async fn test_transient_failure_mid_pagination_does_not_duplicate_records() {
	let mut server = Server::new_async().await;
	let config = test_config(&server.url()).with_page_size(2);

	let first = server
		.mock("GET", "/blocks")
		.match_query(Matcher::Exact("order=block_height.asc".into()))
		.with_status(200)
		.with_body(r#"[{"block_height": 1}, {"block_height": 2}]"#)
		.expect(1)
		.create_async()
		.await;
	let unavailable = server
		.mock("GET", "/blocks")
		.match_query(Matcher::UrlEncoded("offset".into(), "2".into()))
		.with_status(503)
		.expect(1)
		.create_async()
		.await;
	let second = server
		.mock("GET", "/blocks")
		.match_query(Matcher::UrlEncoded("offset".into(), "2".into()))
		.with_status(200)
		.with_body(r#"[{"block_height": 3}]"#)
		.expect(1)
		.create_async()
		.await;

	let client = KoiosClient::new(config).unwrap();
	let blocks = client.blocks(Pagination::all()).await.unwrap();

	assert_eq!(
		blocks,
		vec![
			json!({"block_height": 1}),
			json!({"block_height": 2}),
			json!({"block_height": 3}),
		]
	);
	first.assert_async().await;
	unavailable.assert_async().await;
	second.assert_async().await;
}
