use crate::integration::mocks::{create_oft_sent_logs, logs_to_json, MockEVMTransportClient};
use alloy::{
	primitives::{Address, B256},
	sol_types::SolEvent,
};
use mockall::predicate;
use oft_send_monitor::{
	models::OFTSent,
	services::blockchain::{
		BlockChainClient, BlockChainError, EvmClient, EvmClientTrait, TransportError,
	},
	utils::logging::error::TraceableError,
};
use serde_json::{json, Value};

fn contract() -> Address {
	Address::repeat_byte(0x04)
}

#[tokio::test]
async fn test_get_latest_block_number() {
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport
		.expect_send_raw_request()
		.with(predicate::eq("eth_blockNumber"), predicate::eq(None))
		.times(1)
		.returning(|_, _| Ok(json!({"jsonrpc": "2.0", "id": 1, "result": "0x3e8"})));

	let client = EvmClient::new_with_transport(mock_transport);
	let result = client.get_latest_block_number().await;

	assert_eq!(result.unwrap(), 1000);
}

#[tokio::test]
async fn test_get_latest_block_number_missing_result() {
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport
		.expect_send_raw_request()
		.returning(|_, _| Ok(json!({"jsonrpc": "2.0", "id": 1})));

	let client = EvmClient::new_with_transport(mock_transport);
	let result = client.get_latest_block_number().await;

	match result {
		Err(BlockChainError::RequestError(ctx)) => {
			assert!(ctx.message.contains("Missing 'result' field"));
		}
		other => panic!("expected request error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_get_latest_block_number_invalid_hex() {
	let test_cases = vec![json!("0xzz"), json!(1000), Value::Null];

	for result in test_cases {
		let mut mock_transport = MockEVMTransportClient::new();
		let response = json!({"jsonrpc": "2.0", "id": 1, "result": result.clone()});
		mock_transport
			.expect_send_raw_request()
			.returning(move |_, _| Ok(response.clone()));

		let client = EvmClient::new_with_transport(mock_transport);
		assert!(
			matches!(
				client.get_latest_block_number().await,
				Err(BlockChainError::RequestError(_))
			),
			"result {} should be rejected",
			result
		);
	}
}

#[tokio::test]
async fn test_get_latest_block_number_transport_error() {
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport
		.expect_send_raw_request()
		.returning(|_, _| Err(TransportError::network("connection refused", None, None)));

	let client = EvmClient::new_with_transport(mock_transport);
	let error = client.get_latest_block_number().await.unwrap_err();

	match &error {
		BlockChainError::ConnectionError(ctx) => {
			assert_eq!(ctx.message, "Failed to get latest block number");
			let source = ctx.source.as_ref().unwrap();
			assert!(source.to_string().contains("connection refused"));
		}
		other => panic!("expected connection error, got {:?}", other),
	}
	assert!(!error.trace_id().is_empty());
}

#[tokio::test]
async fn test_get_logs_for_event_request_params() {
	let mut mock_transport = MockEVMTransportClient::new();
	let logs = create_oft_sent_logs(3);
	let response = json!({"jsonrpc": "2.0", "id": 1, "result": logs_to_json(&logs)});

	mock_transport
		.expect_send_raw_request()
		.withf(|method, params| {
			let Some(params) = params else {
				return false;
			};
			let filter = &params[0];
			method == "eth_getLogs"
				&& params.len() == 1
				&& filter["address"] == json!(contract())
				&& filter["topics"] == json!([OFTSent::SIGNATURE_HASH])
				&& filter["fromBlock"] == json!("0x2bc")
				&& filter["toBlock"] == json!("0x3e8")
		})
		.times(1)
		.returning(move |_, _| Ok(response.clone()));

	let client = EvmClient::new_with_transport(mock_transport);
	let result = client
		.get_logs_for_event(contract(), OFTSent::SIGNATURE_HASH, 700, 1000)
		.await
		.unwrap();

	assert_eq!(result, logs);
}

#[tokio::test]
async fn test_get_logs_for_event_from_genesis() {
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport
		.expect_send_raw_request()
		.withf(|_, params| {
			params
				.as_ref()
				.is_some_and(|params| params[0]["fromBlock"] == json!("0x0"))
		})
		.times(1)
		.returning(|_, _| Ok(json!({"jsonrpc": "2.0", "id": 1, "result": []})));

	let client = EvmClient::new_with_transport(mock_transport);
	let result = client
		.get_logs_for_event(contract(), OFTSent::SIGNATURE_HASH, 0, 10)
		.await
		.unwrap();

	assert!(result.is_empty());
}

#[tokio::test]
async fn test_get_logs_for_event_rejects_negative_start() {
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport.expect_send_raw_request().never();

	let client = EvmClient::new_with_transport(mock_transport);
	let result = client
		.get_logs_for_event(contract(), OFTSent::SIGNATURE_HASH, -2600, 1000)
		.await;

	match result {
		Err(BlockChainError::RequestError(ctx)) => {
			assert!(ctx.message.contains("-2600"));
		}
		other => panic!("expected request error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_get_logs_for_event_invalid_response() {
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport.expect_send_raw_request().returning(|_, _| {
		Ok(json!({"jsonrpc": "2.0", "id": 1, "result": [{"address": "not an address"}]}))
	});

	let client = EvmClient::new_with_transport(mock_transport);
	let result = client
		.get_logs_for_event(contract(), OFTSent::SIGNATURE_HASH, 1, 2)
		.await;

	match result {
		Err(BlockChainError::RequestError(ctx)) => {
			assert_eq!(ctx.message, "Failed to parse logs");
		}
		other => panic!("expected request error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_get_logs_for_event_rpc_error() {
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport.expect_send_raw_request().returning(|_, _| {
		Err(TransportError::rpc(
			-32005,
			"query returned more than 10000 results",
			None,
		))
	});

	let client = EvmClient::new_with_transport(mock_transport);
	let error = client
		.get_logs_for_event(contract(), OFTSent::SIGNATURE_HASH, 1, 2)
		.await
		.unwrap_err();

	assert!(matches!(error, BlockChainError::ConnectionError(_)));
	assert!(error.to_string().contains("Failed to get logs for blocks: 1 - 2"));
}

#[tokio::test]
async fn test_pending_logs_are_accepted() {
	let mut mock_transport = MockEVMTransportClient::new();
	mock_transport.expect_send_raw_request().returning(|_, _| {
		Ok(json!({"jsonrpc": "2.0", "id": 1, "result": [{
			"address": "0x0404040404040404040404040404040404040404",
			"topics": [OFTSent::SIGNATURE_HASH],
			"data": "0x",
			"blockNumber": null,
			"transactionHash": null,
			"logIndex": null
		}]}))
	});

	let client = EvmClient::new_with_transport(mock_transport);
	let logs = client
		.get_logs_for_event(contract(), OFTSent::SIGNATURE_HASH, 1, 2)
		.await
		.unwrap();

	assert_eq!(logs.len(), 1);
	assert_eq!(logs[0].transaction_hash, None::<B256>);
}
