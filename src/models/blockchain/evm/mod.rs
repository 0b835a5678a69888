//! Ethereum Virtual Machine (EVM) blockchain specific implementations.
//!
//! This module contains the log representation returned by EVM JSON-RPC
//! providers and the cross-chain send event decoded from it.

mod event;
mod log;

pub use event::{EventRecord, OFTSent, OftSentEvent};
pub use log::Log as EVMReceiptLog;
