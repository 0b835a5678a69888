use crate::integration::mocks::{create_json_rpc_mock, create_test_network};
use mockito::Server;
use oft_send_monitor::{
	models::SecretValue,
	services::blockchain::{BlockchainTransport, EVMTransportClient},
	utils::tests::{create_test_http_client, network::NetworkBuilder},
};
use serde_json::{json, Value};

#[tokio::test]
async fn test_plain_rpc_url() {
	let mut server = Server::new_async().await;
	let mock = create_json_rpc_mock(&mut server, "/", "eth_chainId", json!("0x1"));

	let network = create_test_network("Mainnet", &server.url(), 12.0);
	let transport = EVMTransportClient::new(create_test_http_client(), &network);

	let response = transport
		.send_raw_request::<Value>("eth_chainId", None)
		.await
		.unwrap();

	assert_eq!(response["result"], json!("0x1"));
	mock.assert();
}

#[tokio::test]
async fn test_environment_rpc_url() {
	let mut server = Server::new_async().await;
	let mock = create_json_rpc_mock(&mut server, "/v2/env-key", "eth_blockNumber", json!("0x10"));

	let env_var = "OFT_MONITOR_TEST_EVM_TRANSPORT_RPC_URL";
	std::env::set_var(env_var, format!("{}/v2/env-key", server.url()));

	let network = NetworkBuilder::new().name("Base").rpc_url_env(env_var).build();
	assert!(matches!(network.rpc_url, SecretValue::Environment(_)));

	let transport = EVMTransportClient::new(create_test_http_client(), &network);
	assert!(!format!("{:?}", transport).contains("env-key"));

	let response = transport
		.send_raw_request::<Value>("eth_blockNumber", None)
		.await
		.unwrap();
	assert_eq!(response["result"], json!("0x10"));

	mock.assert();
	std::env::remove_var(env_var);
}
