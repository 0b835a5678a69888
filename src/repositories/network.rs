//! Network registry repository implementation.
//!
//! This module provides the ordered list of networks the monitor checks. The
//! registry is either the built-in set of networks, reached through the
//! Alchemy RPC gateway, or an ordered list loaded from a JSON file.

#![allow(clippy::result_large_err)]

use std::{collections::HashMap, path::Path};

use alloy::primitives::{address, Address};

use crate::{
	models::{ConfigLoader, Network, SecretString, SecretValue},
	repositories::error::RepositoryError,
};

/// A built-in registry entry, before the API key is known
struct BuiltinNetwork {
	name: &'static str,
	/// Alchemy subdomain of the network
	subdomain: &'static str,
	contract_address: Address,
	block_time_seconds: f64,
}

/// Networks checked when no registry file is given, in report order
const BUILTIN_NETWORKS: [BuiltinNetwork; 9] = [
	BuiltinNetwork {
		name: "Mainnet",
		subdomain: "eth-mainnet",
		contract_address: address!("0xFE7fe01F8B9A76803aF3750144C2715D9bcf7D0D"),
		block_time_seconds: 12.0,
	},
	BuiltinNetwork {
		name: "Blast",
		subdomain: "blast-mainnet",
		contract_address: address!("0x04C0599Ae5A44757c0af6F9eC3b93da8976c150A"),
		block_time_seconds: 2.0,
	},
	BuiltinNetwork {
		name: "Mode",
		subdomain: "mode-mainnet",
		contract_address: address!("0x04C0599Ae5A44757c0af6F9eC3b93da8976c150A"),
		block_time_seconds: 2.0,
	},
	BuiltinNetwork {
		name: "Linea",
		subdomain: "linea-mainnet",
		contract_address: address!("0x1bf74c010e6320bab11e2e5a532b5ac15e0b8aa6"),
		block_time_seconds: 2.0,
	},
	BuiltinNetwork {
		name: "Base",
		subdomain: "base-mainnet",
		contract_address: address!("0x04C0599Ae5A44757c0af6F9eC3b93da8976c150A"),
		block_time_seconds: 2.0,
	},
	BuiltinNetwork {
		name: "BSC",
		subdomain: "bnb-mainnet",
		contract_address: address!("0x04C0599Ae5A44757c0af6F9eC3b93da8976c150A"),
		block_time_seconds: 3.0,
	},
	BuiltinNetwork {
		name: "Optimism",
		subdomain: "opt-mainnet",
		contract_address: address!("0x5A7fACB970D094B6C7FF1df0eA68D99E6e73CBFF"),
		block_time_seconds: 2.0,
	},
	BuiltinNetwork {
		name: "Scroll",
		subdomain: "scroll-mainnet",
		contract_address: address!("0x01f0a31698c4d065659b9bdc21b3610292a1c506"),
		block_time_seconds: 3.0,
	},
	BuiltinNetwork {
		name: "ZkSync",
		subdomain: "zksync-mainnet",
		contract_address: address!("0xc1fa6e2e8667d9be0ca938a54c7e0285e9df924a"),
		block_time_seconds: 1.0,
	},
];

/// Builds the Alchemy RPC URL of a network
///
/// An empty key is not rejected; the provider answers with an authentication
/// error instead.
fn alchemy_rpc_url(subdomain: &str, api_key: &SecretString) -> SecretString {
	SecretString::new(format!(
		"https://{}.g.alchemy.com/v2/{}",
		subdomain,
		api_key.as_str()
	))
}

/// Repository holding the ordered network registry
#[derive(Clone, Debug)]
pub struct NetworkRepository {
	/// Networks in report order
	pub networks: Vec<Network>,
}

impl NetworkRepository {
	/// Create the built-in registry, authenticating every network with the
	/// given API key
	pub fn builtin(api_key: &SecretString) -> Self {
		let networks = BUILTIN_NETWORKS
			.iter()
			.map(|builtin| Network {
				name: builtin.name.to_string(),
				rpc_url: SecretValue::Plain(alchemy_rpc_url(builtin.subdomain, api_key)),
				contract_address: builtin.contract_address,
				block_time_seconds: builtin.block_time_seconds,
			})
			.collect();

		NetworkRepository { networks }
	}

	/// Create a network repository from the given registry file
	///
	/// The file order is kept as the report order.
	pub fn new(path: &Path) -> Result<Self, RepositoryError> {
		let networks = Self::load_all(path)?;
		Ok(NetworkRepository { networks })
	}

	/// Create a network repository from networks built in code
	///
	/// The networks go through the same validation as a registry file.
	pub fn new_with_networks(networks: Vec<Network>) -> Result<Self, RepositoryError> {
		if networks.is_empty() {
			return Err(RepositoryError::validation_error(
				"At least one network must be configured",
				None,
				None,
			));
		}

		for (index, network) in networks.iter().enumerate() {
			let existing_networks: Vec<&Network> = networks[..index].iter().collect();
			network
				.validate()
				.and_then(|_| {
					Network::validate_uniqueness(&existing_networks, network, "<in-memory>")
				})
				.map_err(|e| {
					RepositoryError::validation_error(
						format!("Invalid network '{}'", network.name),
						Some(Box::new(e)),
						None,
					)
				})?;
		}

		Ok(NetworkRepository { networks })
	}
}

/// Interface for network repository implementations
///
/// This trait defines the standard operations that any network repository must support,
/// allowing for different storage backends while maintaining a consistent interface.
pub trait NetworkRepositoryTrait: Clone {
	/// Load all network configurations from the given registry file
	///
	/// This is a static method that doesn't require an instance.
	fn load_all(path: &Path) -> Result<Vec<Network>, RepositoryError>;

	/// Get all networks in report order
	///
	/// Returns a copy of the registry to prevent external mutation.
	fn get_all(&self) -> Vec<Network>;
}

impl NetworkRepositoryTrait for NetworkRepository {
	fn load_all(path: &Path) -> Result<Vec<Network>, RepositoryError> {
		Network::load_all_from_path(path).map_err(|e| {
			RepositoryError::load_error(
				"Failed to load networks",
				Some(Box::new(e)),
				Some(HashMap::from([(
					"path".to_string(),
					path.display().to_string(),
				)])),
			)
		})
	}

	fn get_all(&self) -> Vec<Network> {
		self.networks.clone()
	}
}
