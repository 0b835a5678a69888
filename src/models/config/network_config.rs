//! Network configuration loading and validation.
//!
//! This module implements the ConfigLoader trait for Network configurations,
//! allowing an ordered network registry to be loaded from a JSON file.

use std::{collections::HashMap, path::Path};

use crate::{
	models::{config::error::ConfigError, ConfigLoader, Network, SecretValue},
	utils::normalize_string,
};

impl ConfigLoader for Network {
	/// Load all network configurations from a JSON file
	///
	/// The file holds an array of network entries. Entries are validated one
	/// by one, in file order, and names must be unique.
	fn load_all_from_path(path: &Path) -> Result<Vec<Self>, ConfigError> {
		let path_metadata = || {
			Some(HashMap::from([(
				"path".to_string(),
				path.display().to_string(),
			)]))
		};

		if !Self::is_json_file(path) {
			return Err(ConfigError::file_error(
				"network registry must be a .json file",
				None,
				path_metadata(),
			));
		}

		let file = std::fs::File::open(path).map_err(|e| {
			ConfigError::file_error(
				format!("failed to open network config file: {}", e),
				Some(Box::new(e)),
				path_metadata(),
			)
		})?;
		let networks: Vec<Network> = serde_json::from_reader(file).map_err(|e| {
			ConfigError::parse_error(
				format!("failed to parse network config: {}", e),
				Some(Box::new(e)),
				path_metadata(),
			)
		})?;

		if networks.is_empty() {
			return Err(ConfigError::validation_error(
				"At least one network must be configured",
				None,
				path_metadata(),
			));
		}

		let file_path = path.display().to_string();
		for (index, network) in networks.iter().enumerate() {
			network.validate()?;

			let existing_networks: Vec<&Network> = networks[..index].iter().collect();
			Self::validate_uniqueness(&existing_networks, network, &file_path)?;
		}

		Ok(networks)
	}

	/// Validate the network configuration
	///
	/// Ensures that:
	/// - The network has a name
	/// - The RPC URL is an http(s) URL, or names an environment variable
	/// - The block time is a positive, finite number of seconds
	fn validate(&self) -> Result<(), ConfigError> {
		// Validate network name
		if self.name.trim().is_empty() {
			return Err(ConfigError::validation_error(
				"Network name is required",
				None,
				None,
			));
		}

		// Validate RPC URL
		match &self.rpc_url {
			SecretValue::Plain(url) => {
				let parsed = url::Url::parse(url.as_str()).map_err(|e| {
					ConfigError::validation_error(
						format!("Network '{}' has a malformed RPC URL: {}", self.name, e),
						None,
						None,
					)
				})?;
				if !matches!(parsed.scheme(), "http" | "https") {
					return Err(ConfigError::validation_error(
						"RPC URL must start with http:// or https://",
						None,
						Some(HashMap::from([(
							"network_name".to_string(),
							self.name.clone(),
						)])),
					));
				}
			}
			SecretValue::Environment(env_var) => {
				if env_var.trim().is_empty() {
					return Err(ConfigError::validation_error(
						"RPC URL environment variable name is required",
						None,
						Some(HashMap::from([(
							"network_name".to_string(),
							self.name.clone(),
						)])),
					));
				}
			}
		}

		// Validate block time
		if !self.block_time_seconds.is_finite() || self.block_time_seconds <= 0.0 {
			return Err(ConfigError::validation_error(
				format!(
					"Block time must be a positive number of seconds, got {}",
					self.block_time_seconds
				),
				None,
				Some(HashMap::from([(
					"network_name".to_string(),
					self.name.clone(),
				)])),
			));
		}

		// Log a warning if the network uses an insecure protocol
		self.validate_protocol();

		Ok(())
	}

	/// Validate the safety of the protocol used in the network
	///
	/// Only the host is logged, the rest of the URL may carry an API key.
	fn validate_protocol(&self) {
		if let SecretValue::Plain(url) = &self.rpc_url {
			if let Ok(parsed) = url::Url::parse(url.as_str()) {
				if parsed.scheme() == "http" {
					tracing::warn!(
						"Network '{}' uses an insecure RPC URL (host: {})",
						self.name,
						parsed.host_str().unwrap_or("unknown")
					);
				}
			}
		}
	}

	fn validate_uniqueness(
		instances: &[&Self],
		current_instance: &Self,
		file_path: &str,
	) -> Result<(), ConfigError> {
		if instances.iter().any(|existing_network| {
			normalize_string(&existing_network.name) == normalize_string(&current_instance.name)
		}) {
			return Err(ConfigError::validation_error(
				format!("Duplicate network name found: '{}'", current_instance.name),
				None,
				Some(HashMap::from([
					("network_name".to_string(), current_instance.name.clone()),
					("path".to_string(), file_path.to_string()),
				])),
			));
		}
		Ok(())
	}
}
