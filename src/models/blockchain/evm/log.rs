//! EVM log data structures.

use alloy::primitives::{Address, Bytes, B256, U64};
use serde::{Deserialize, Serialize};

/// A log entry as returned by `eth_getLogs`
///
/// Only `address`, `topics` and `data` are mandatory. Providers omit the
/// positional fields for pending logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
	/// Address of the emitting contract
	pub address: Address,
	/// Topics, the first one being the event signature hash
	pub topics: Vec<B256>,
	/// ABI-encoded non-indexed event arguments
	pub data: Bytes,
	/// Block Hash
	#[serde(rename = "blockHash")]
	pub block_hash: Option<B256>,
	/// Block Number
	#[serde(rename = "blockNumber")]
	pub block_number: Option<U64>,
	/// Transaction Hash
	#[serde(rename = "transactionHash")]
	pub transaction_hash: Option<B256>,
	/// Transaction Index
	#[serde(rename = "transactionIndex")]
	pub transaction_index: Option<U64>,
	/// Log Index in Block
	#[serde(rename = "logIndex")]
	pub log_index: Option<U64>,
	/// Removed because of a chain reorganisation
	#[serde(default)]
	pub removed: Option<bool>,
}

impl Log {
	/// Returns the event signature topic, if any
	pub fn topic0(&self) -> Option<&B256> {
		self.topics.first()
	}
}
