//! Cross-chain send monitor.
//!
//! This library reports the most recent `OFTSent` events emitted by a set of
//! cross-chain token contracts deployed on several EVM networks. It includes:
//!
//! - A network registry, built in or loaded from a JSON file
//! - A JSON-RPC client for EVM nodes
//! - Block window estimation from a lookback duration
//! - A sequential console report
//!
//! # Module Structure
//!
//! - `bootstrap`: Builds the registry and its provider clients
//! - `models`: Data structures for configuration and blockchain data
//! - `repositories`: Network registry storage and validation
//! - `services`: Blockchain interaction, event lookup and reporting
//! - `utils`: Common utilities and helper functions

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
