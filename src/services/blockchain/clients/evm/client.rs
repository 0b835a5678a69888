//! EVM-compatible blockchain client implementation.
//!
//! This module provides functionality to interact with Ethereum and other EVM-compatible
//! blockchains, supporting the chain head lookup and event log filtering used by the
//! monitor.

use std::collections::HashMap;

use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::instrument;

use crate::{
	models::{EVMReceiptLog, Network},
	services::blockchain::{
		client::BlockChainClient,
		transports::{BlockchainTransport, EVMTransportClient},
		BlockChainError,
	},
};

/// Client implementation for Ethereum Virtual Machine (EVM) compatible blockchains
///
/// Provides high-level access to EVM blockchain data and operations through HTTP transport.
#[derive(Clone, Debug)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying HTTP transport client for RPC communication
	http_client: T,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(http_client: T) -> Self {
		Self { http_client }
	}
}

impl EvmClient<EVMTransportClient> {
	/// Creates a new EVM client instance
	///
	/// # Arguments
	/// * `client` - HTTP client shared by all networks
	/// * `network` - Network configuration containing the RPC endpoint
	pub fn new(client: reqwest::Client, network: &Network) -> Self {
		Self::new_with_transport(EVMTransportClient::new(client, network))
	}
}

/// Extracts the `result` field of a JSON-RPC response
fn take_result(mut response: Value, method: &str) -> Result<Value, BlockChainError> {
	match response.get_mut("result") {
		Some(result) => Ok(result.take()),
		None => Err(BlockChainError::request_error(
			"Missing 'result' field",
			None,
			Some(HashMap::from([("method".to_string(), method.to_string())])),
		)),
	}
}

/// Extended functionality specific to EVM-compatible blockchains
#[async_trait]
pub trait EvmClientTrait {
	/// Retrieves the logs of one event emitted by one contract over a block range
	///
	/// # Arguments
	/// * `contract_address` - Address of the emitting contract
	/// * `topic0` - Signature hash of the event
	/// * `from_block` - Starting block number, which must not be negative
	/// * `to_block` - Ending block number (inclusive)
	///
	/// # Returns
	/// * `Result<Vec<EVMReceiptLog>, BlockChainError>` - Matching logs in provider order
	async fn get_logs_for_event(
		&self,
		contract_address: Address,
		topic0: B256,
		from_block: i128,
		to_block: u64,
	) -> Result<Vec<EVMReceiptLog>, BlockChainError>;
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> EvmClientTrait for EvmClient<T> {
	/// Retrieves event logs within the specified block range
	///
	/// A negative starting block cannot be expressed as a block quantity and is
	/// rejected without contacting the node.
	#[instrument(skip(self), fields(from_block, to_block))]
	async fn get_logs_for_event(
		&self,
		contract_address: Address,
		topic0: B256,
		from_block: i128,
		to_block: u64,
	) -> Result<Vec<EVMReceiptLog>, BlockChainError> {
		let from_block = u64::try_from(from_block).map_err(|e| {
			BlockChainError::request_error(
				format!("Invalid starting block {}: block numbers cannot be negative", from_block),
				Some(Box::new(e)),
				None,
			)
		})?;

		// Convert parameters to JSON-RPC format
		let params = json!([{
			"address": contract_address,
			"topics": [topic0],
			"fromBlock": format!("0x{:x}", from_block),
			"toBlock": format!("0x{:x}", to_block),
		}]);

		let response = self
			.http_client
			.send_raw_request("eth_getLogs", Some(params))
			.await
			.map_err(|e| {
				BlockChainError::connection_error(
					format!("Failed to get logs for blocks: {} - {}", from_block, to_block),
					Some(Box::new(e)),
					None,
				)
			})?;

		let logs_data = take_result(response, "eth_getLogs")?;

		// Parse the response into the expected type
		serde_json::from_value(logs_data).map_err(|e| {
			BlockChainError::request_error("Failed to parse logs", Some(Box::new(e)), None)
		})
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> BlockChainClient for EvmClient<T> {
	/// Retrieves the latest block number
	#[instrument(skip(self))]
	async fn get_latest_block_number(&self) -> Result<u64, BlockChainError> {
		let response = self
			.http_client
			.send_raw_request::<Value>("eth_blockNumber", None)
			.await
			.map_err(|e| {
				BlockChainError::connection_error(
					"Failed to get latest block number",
					Some(Box::new(e)),
					None,
				)
			})?;

		// Extract the "result" field from the JSON-RPC response
		let result = take_result(response, "eth_blockNumber")?;
		let hex_str = result.as_str().ok_or_else(|| {
			BlockChainError::request_error("Block number is not a string", None, None)
		})?;

		// Parse hex string to u64
		u64::from_str_radix(hex_str.trim_start_matches("0x"), 16).map_err(|e| {
			BlockChainError::request_error(
				format!("Failed to parse block number '{}'", hex_str),
				Some(Box::new(e)),
				None,
			)
		})
	}
}
