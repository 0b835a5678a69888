use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::models::SecretValue;

/// Configuration of one monitored network.
///
/// Every entry is self-describing: adding a network means adding one entry,
/// nothing else refers to it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Network {
	/// Human-readable name of the network, used in the report
	pub name: String,

	/// JSON-RPC endpoint of the provider (can be a secret value)
	pub rpc_url: SecretValue,

	/// Address of the contract emitting the cross-chain send events
	pub contract_address: Address,

	/// Average block production interval in seconds
	pub block_time_seconds: f64,
}

/// A network together with the client used to reach its provider.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct MonitoredNetwork<C> {
	/// Human-readable name of the network
	pub name: String,

	/// Handle to the network's chain-data provider
	pub client: C,

	/// Address of the contract emitting the cross-chain send events
	pub contract_address: Address,

	/// Average block production interval in seconds
	pub block_time_seconds: f64,
}

impl<C> MonitoredNetwork<C> {
	/// Pairs a network configuration with a provider client
	pub fn new(network: &Network, client: C) -> Self {
		Self {
			name: network.name.clone(),
			client,
			contract_address: network.contract_address,
			block_time_seconds: network.block_time_seconds,
		}
	}
}
