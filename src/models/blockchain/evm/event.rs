//! Cross-chain send event data structures.
//!
//! The monitored contracts emit
//! `OFTSent(bytes32 indexed guid, uint32 dstEid, address indexed fromAddress, uint256 amountSentLD, uint256 amountReceivedLD)`.
//! Logs are filtered by [`OFTSent::SIGNATURE_HASH`] alone; the payload is
//! decoded with the `sol!` bindings on a best-effort basis and never affects
//! whether a log is reported.

use std::fmt;

use alloy::{
	primitives::{Address, B256, U256},
	sol,
	sol_types::SolEvent,
};
use serde::{Deserialize, Serialize};

use crate::models::blockchain::evm::log::Log;

sol! {
	/// Emitted by the token contracts for every cross-chain send
	event OFTSent(
		bytes32 indexed guid,
		uint32 dstEid,
		address indexed fromAddress,
		uint256 amountSentLD,
		uint256 amountReceivedLD
	);
}

/// Decoded payload of an `OFTSent` log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OftSentEvent {
	/// Cross-chain message identifier
	pub guid: B256,
	/// Endpoint id of the destination network
	pub dst_eid: u32,
	/// Sender of the tokens on the source network
	pub from_address: Address,
	/// Amount debited on the source network, in local decimals
	pub amount_sent_ld: U256,
	/// Amount credited on the destination network, in local decimals
	pub amount_received_ld: U256,
}

impl OftSentEvent {
	/// Decodes a log with the canonical layout (`guid` and `fromAddress`
	/// indexed, three words of data).
	///
	/// Returns `None` for any other shape.
	pub fn decode(log: &Log) -> Option<Self> {
		if log.topics.len() != 3 || log.topics[0] != OFTSent::SIGNATURE_HASH {
			return None;
		}

		let event = OFTSent::decode_raw_log(log.topics.iter().copied(), &log.data).ok()?;

		Some(Self::from(event))
	}
}

impl From<OFTSent> for OftSentEvent {
	fn from(event: OFTSent) -> Self {
		Self {
			guid: event.guid,
			dst_eid: event.dstEid,
			from_address: event.fromAddress,
			amount_sent_ld: event.amountSentLD,
			amount_received_ld: event.amountReceivedLD,
		}
	}
}

/// The part of a retrieved log that gets reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
	/// Hash of the transaction that emitted the event (absent for pending logs)
	pub transaction_hash: Option<B256>,
	/// Block the log was included in
	pub block_number: Option<u64>,
	/// Position of the log within its block
	pub log_index: Option<u64>,
	/// Decoded payload, when the log has the canonical layout
	pub event: Option<OftSentEvent>,
}

impl From<&Log> for EventRecord {
	fn from(log: &Log) -> Self {
		Self {
			transaction_hash: log.transaction_hash,
			block_number: log.block_number.map(|n| n.to::<u64>()),
			log_index: log.log_index.map(|n| n.to::<u64>()),
			event: OftSentEvent::decode(log),
		}
	}
}

impl From<Log> for EventRecord {
	fn from(log: Log) -> Self {
		Self::from(&log)
	}
}

impl fmt::Display for EventRecord {
	/// Renders the transaction hash, or `pending` when the provider did not
	/// return one.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.transaction_hash {
			Some(hash) => write!(f, "{}", hash),
			None => write!(f, "pending"),
		}
	}
}
