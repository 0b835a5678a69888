//! Bootstrap module for building the network registry and its provider clients.
//!
//! This module turns the configured networks into [`MonitoredNetwork`]s ready for the report
//! driver. No request is made while bootstrapping; providers are only contacted once the
//! report runs.
//!
//! # Functions
//! - `load_networks`: Builds the registry, from a file when one is given
//! - `create_monitored_networks`: Pairs every network with an EVM client sharing one HTTP client

use std::{error::Error, path::Path};

use crate::{
	models::{MonitoredNetwork, Network, SecretString},
	repositories::{NetworkRepository, NetworkRepositoryTrait, RepositoryError},
	services::blockchain::{BlockChainError, EVMTransportClient, EvmClient},
	utils::http::{create_http_client, HttpClientConfig},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// A registry entry backed by the JSON-RPC EVM client
pub type EvmMonitoredNetwork = MonitoredNetwork<EvmClient<EVMTransportClient>>;

/// Builds the network registry.
///
/// Without a path, the built-in networks are used and authenticated with `api_key`. With a
/// path, the networks are loaded from that file and `api_key` is not used.
///
/// # Errors
/// Returns an error if the file cannot be read or one of its entries is invalid
pub fn load_networks(
	networks_path: Option<&Path>,
	api_key: &SecretString,
) -> std::result::Result<Vec<Network>, RepositoryError> {
	let repository = match networks_path {
		Some(path) => NetworkRepository::new(path)?,
		None => NetworkRepository::builtin(api_key),
	};
	Ok(repository.get_all())
}

/// Creates the provider client of every network, preserving registry order.
///
/// All clients share a single HTTP client, built from `http_config`.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built
pub fn create_monitored_networks(
	networks: &[Network],
	http_config: &HttpClientConfig,
) -> std::result::Result<Vec<EvmMonitoredNetwork>, BlockChainError> {
	let http_client = create_http_client(http_config).map_err(|e| {
		BlockChainError::internal_error("Failed to create HTTP client", Some(Box::new(e)), None)
	})?;

	Ok(networks
		.iter()
		.map(|network| {
			MonitoredNetwork::new(network, EvmClient::new(http_client.clone(), network))
		})
		.collect())
}
