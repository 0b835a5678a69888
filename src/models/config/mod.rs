//! Configuration loading and validation.
//!
//! This module provides the trait and implementation for loading and
//! validating the network registry file.

#![allow(clippy::result_large_err)]

use std::path::Path;

mod error;
mod network_config;

pub use error::ConfigError;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Load an ordered list of configurations from a single JSON file
	///
	/// The order of the entries in the file is preserved.
	fn load_all_from_path(path: &Path) -> Result<Vec<Self>, ConfigError>;

	/// Validate the configuration
	///
	/// Returns Ok(()) if valid, or an error message if invalid.
	fn validate(&self) -> Result<(), ConfigError>;

	/// Validate safety of the protocol
	///
	/// Returns if safe, or logs a warning message if unsafe.
	fn validate_protocol(&self);

	/// Check if a file is a JSON file based on extension
	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}

	/// Validate uniqueness of the configuration
	/// # Arguments
	/// * `instances` - The instances to validate uniqueness against
	/// * `current_instance` - The current instance to validate uniqueness for
	/// * `file_path` - The path to the file containing the current instance (for logging purposes)
	///
	/// Returns Ok(()) if valid, or an error message if found duplicate names.
	fn validate_uniqueness(
		instances: &[&Self],
		current_instance: &Self,
		file_path: &str,
	) -> Result<(), ConfigError>;
}
