use crate::integration::mocks::{
	create_json_rpc_mock, create_oft_sent_logs, create_test_network, json_rpc_result,
	logs_to_json, test_contract_address, MockEvmClientTrait,
};
use alloy::{primitives::B256, sol_types::SolEvent};
use mockito::{Matcher, Server};
use oft_send_monitor::{
	models::{FetchOutcome, OFTSent},
	services::{
		blockchain::{BlockChainError, EvmClient},
		monitor::fetch_recent_events,
	},
	utils::tests::create_test_http_client,
};
use serde_json::json;
use tracing_test::traced_test;

#[tokio::test]
async fn test_fetch_over_json_rpc() {
	let mut server = Server::new_async().await;
	let block_mock = create_json_rpc_mock(&mut server, "/", "eth_blockNumber", json!("0x3e8"));
	let logs_mock = server
		.mock("POST", "/")
		.match_body(Matcher::AllOf(vec![
			Matcher::Regex(r#""method":"eth_getLogs""#.to_string()),
			Matcher::Regex(r#""fromBlock":"0x2bc""#.to_string()),
			Matcher::Regex(r#""toBlock":"0x3e8""#.to_string()),
		]))
		.with_status(200)
		.with_body(json_rpc_result(logs_to_json(&create_oft_sent_logs(7))).to_string())
		.create_async()
		.await;

	let network = create_test_network("A", &server.url(), 2.0);
	let client = EvmClient::new(create_test_http_client(), &network);

	let outcome =
		fetch_recent_events(&client, "A", test_contract_address(), 2.0, 10).await;

	let records = outcome.into_records().unwrap();
	let hashes: Vec<B256> = records
		.iter()
		.filter_map(|record| record.transaction_hash)
		.collect();
	assert_eq!(hashes, (3..=7).map(B256::repeat_byte).collect::<Vec<_>>());

	let event = records[4].event.as_ref().unwrap();
	assert_eq!(event.dst_eid, 30101);
	assert_eq!(records[4].block_number, Some(907));

	block_mock.assert();
	logs_mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_without_events_over_json_rpc() {
	let mut server = Server::new_async().await;
	let _block_mock = create_json_rpc_mock(&mut server, "/", "eth_blockNumber", json!("0x64"));
	let _logs_mock = create_json_rpc_mock(&mut server, "/", "eth_getLogs", json!([]));

	let network = create_test_network("Scroll", &server.url(), 3.0);
	let client = EvmClient::new(create_test_http_client(), &network);

	let outcome = fetch_recent_events(&client, "Scroll", test_contract_address(), 3.0, 1).await;
	assert_eq!(outcome, FetchOutcome::NoEvents);
}

#[tokio::test]
#[traced_test]
async fn test_fetch_failure_over_json_rpc() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/v2/secret-key")
		.with_status(401)
		.with_body(r#"{"error":"Must be authenticated!"}"#)
		.create_async()
		.await;

	let network = create_test_network("B", &format!("{}/v2/secret-key", server.url()), 2.0);
	let client = EvmClient::new(create_test_http_client(), &network);

	let outcome = fetch_recent_events(&client, "B", test_contract_address(), 2.0, 10).await;

	match &outcome {
		FetchOutcome::Failed(failure) => {
			assert!(failure.reason.contains("Failed to get latest block number"));
			assert!(failure.reason.contains("401"));
			assert!(!failure.reason.contains("secret-key"));
		}
		other => panic!("expected failure, got {:?}", other),
	}
	assert!(logs_contain("Error fetching logs for B:"));
	mock.assert_async().await;
}

#[tokio::test]
#[traced_test]
async fn test_fetch_window_before_genesis() {
	let mut server = Server::new_async().await;
	let _block_mock = create_json_rpc_mock(&mut server, "/", "eth_blockNumber", json!("0x3e8"));
	let logs_mock = server
		.mock("POST", "/")
		.match_body(Matcher::Regex(r#""method":"eth_getLogs""#.to_string()))
		.expect(0)
		.create_async()
		.await;

	let network = create_test_network("ZkSync", &server.url(), 1.0);
	let client = EvmClient::new(create_test_http_client(), &network);

	let outcome = fetch_recent_events(&client, "ZkSync", test_contract_address(), 1.0, 60).await;

	assert!(outcome.is_failure());
	assert!(logs_contain("Error fetching logs for ZkSync:"));
	assert!(logs_contain("-2600"));
	logs_mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_with_mocked_client() {
	let mut client = MockEvmClientTrait::new();
	client
		.expect_get_latest_block_number()
		.times(1)
		.returning(|| Ok(20_000));
	client
		.expect_get_logs_for_event()
		.withf(|address, topic0, from_block, to_block| {
			*address == test_contract_address()
				&& *topic0 == OFTSent::SIGNATURE_HASH
				&& *from_block == 17_000
				&& *to_block == 20_000
		})
		.times(1)
		.returning(|_, _, _, _| Ok(create_oft_sent_logs(4)));

	let outcome = fetch_recent_events(&client, "Mainnet", test_contract_address(), 12.0, 600).await;

	assert_eq!(outcome.records().len(), 4);
	assert_eq!(
		outcome.records()[0].transaction_hash,
		Some(B256::repeat_byte(1))
	);
}

#[tokio::test]
async fn test_fetch_logs_failure_with_mocked_client() {
	let mut client = MockEvmClientTrait::new();
	client.expect_get_latest_block_number().returning(|| Ok(1000));
	client.expect_get_logs_for_event().returning(|_, _, _, _| {
		Err(BlockChainError::request_error("Failed to parse logs", None, None))
	});

	let outcome = fetch_recent_events(&client, "Linea", test_contract_address(), 2.0, 10).await;

	match outcome {
		FetchOutcome::Failed(failure) => {
			assert_eq!(failure.reason, "Request error: Failed to parse logs");
			assert!(!failure.trace_id.is_empty());
		}
		other => panic!("expected failure, got {:?}", other),
	}
}
