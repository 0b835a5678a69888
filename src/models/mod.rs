//! Domain models and data structures for cross-chain send monitoring.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `blockchain`: EVM log and event types
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (Network, fetch outcomes)
//! - `security`: Security models (Secret)

mod blockchain;
mod config;
mod core;
mod security;

// Re-export blockchain types
pub use blockchain::evm::{EVMReceiptLog, EventRecord, OFTSent, OftSentEvent};

// Re-export core types
pub use core::{FetchFailure, FetchOutcome, MonitoredNetwork, Network};

// Re-export config types
pub use config::{ConfigError, ConfigLoader};

// Re-export security types
pub use security::{SecretString, SecretValue};
