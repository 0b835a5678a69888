//! Network transport implementations for blockchain clients.
//!
//! Provides concrete implementations for different blockchain network protocols:
//!
//! - Generic HTTP transport for JSON-RPC nodes
//! - EVM transport wrapping the HTTP transport

mod evm {
	pub mod http;
}

mod error;
mod http;

pub use error::TransportError;
pub use evm::http::EVMTransportClient;
pub use http::{redact_url, HttpTransportClient};

use serde::Serialize;
use serde_json::{json, Value};

/// Base trait for all blockchain transport clients
#[async_trait::async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Send a raw request to the blockchain
	///
	/// Returns the full JSON-RPC response object. Responses carrying an
	/// `error` object are returned as errors.
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize;

	/// Customizes the request for specific blockchain requirements
	async fn customize_request<P>(&self, method: &str, params: Option<P>) -> Value
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		// Default implementation for JSON-RPC
		json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": method,
			"params": params.map(|p| p.into())
		})
	}
}
