//! Core blockchain client interface and traits.
//!
//! This module defines the common interface that all blockchain implementations
//! must follow, ensuring consistent behavior across different blockchain types.

use async_trait::async_trait;

use crate::services::blockchain::BlockChainError;

/// Defines the core interface for blockchain clients
///
/// This trait must be implemented by all blockchain-specific clients to provide
/// standardized access to blockchain data and operations.
#[async_trait]
pub trait BlockChainClient: Send + Sync {
	/// Retrieves the latest block number from the blockchain
	///
	/// # Returns
	/// * `Result<u64, BlockChainError>` - The latest block number or an error
	async fn get_latest_block_number(&self) -> Result<u64, BlockChainError>;
}
