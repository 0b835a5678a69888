//! EVM transport implementation for blockchain interactions.
//!
//! This module provides a client implementation for interacting with EVM-compatible nodes
//! by wrapping the HttpTransportClient. This allows for consistent behavior with other
//! transport implementations while providing specific EVM-focused functionality.

use serde::Serialize;
use serde_json::Value;

use crate::{
	models::Network,
	services::blockchain::transports::{BlockchainTransport, HttpTransportClient, TransportError},
};

/// A client for interacting with EVM-compatible blockchain nodes
///
/// This implementation wraps the HttpTransportClient to provide consistent
/// behavior with other transport implementations while offering EVM-specific
/// functionality.
#[derive(Clone, Debug)]
pub struct EVMTransportClient {
	/// The underlying HTTP transport client that handles actual RPC communications
	pub http_client: HttpTransportClient,
}

impl EVMTransportClient {
	/// Creates a new EVM transport client for the network's RPC endpoint
	///
	/// The RPC URL secret is resolved here. No request is made.
	///
	/// # Arguments
	/// * `client` - Shared HTTP client
	/// * `network` - Network configuration containing the RPC URL
	pub fn new(client: reqwest::Client, network: &Network) -> Self {
		let http_client = HttpTransportClient::new(client, network.rpc_url.resolve());
		Self { http_client }
	}
}

#[async_trait::async_trait]
impl BlockchainTransport for EVMTransportClient {
	/// Sends a raw JSON-RPC request to the EVM node
	///
	/// # Arguments
	/// * `method` - The JSON-RPC method to call
	/// * `params` - Optional parameters to pass with the request
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - The JSON response or error
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.http_client.send_raw_request(method, params).await
	}
}
