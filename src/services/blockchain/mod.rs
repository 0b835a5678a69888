//! Blockchain client interfaces and implementations.
//!
//! Provides abstractions and concrete implementations for interacting with
//! EVM-compatible networks. Includes:
//!
//! - Generic blockchain client trait
//! - EVM specific client
//! - Network transport implementations
//! - Error handling for blockchain operations

mod client;
mod clients;
mod error;
mod transports;

pub use client::BlockChainClient;
pub use clients::{EvmClient, EvmClientTrait};
pub use error::BlockChainError;
pub use transports::{
	redact_url, BlockchainTransport, EVMTransportClient, HttpTransportClient, TransportError,
};
