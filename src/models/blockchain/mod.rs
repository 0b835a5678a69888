//! Blockchain-specific model implementations.
//!
//! Only EVM-compatible networks are monitored.

pub mod evm;
