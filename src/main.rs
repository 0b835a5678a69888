//! Cross-chain send monitor entry point.
//!
//! This binary prints, for every monitored network, the transaction hashes of
//! the most recent cross-chain sends within a lookback window.
//!
//! # Flow
//! 1. Loads `.env` and applies CLI options to the environment
//! 2. Sets up logging (stderr, or a file with `--log-file`)
//! 3. Builds the network registry, built in or from `--networks`
//! 4. Checks every network in order and writes the report to stdout
//!
//! Failures of individual networks are logged and reported as "no sends"; they
//! never change the exit code. Only configuration errors, raised before any
//! network is checked, make the process fail.

use oft_send_monitor::{
	bootstrap::{create_monitored_networks, load_networks, Result},
	models::SecretString,
	services::report::ReportDriver,
	utils::{
		constants::API_KEY_ENV,
		logging::{
			error::{format_error_chain, TraceableError},
			setup_logging,
		},
		parse_lookback_minutes, HttpClientConfig,
	},
};

use clap::Parser;
use dotenvy::dotenv_override;
use std::{
	env::{set_var, var},
	path::PathBuf,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(
	name = "oft-send-monitor",
	about = "Reports the most recent cross-chain token sends on every monitored network.",
	version
)]
struct Cli {
	/// Lookback window in minutes (default: 60)
	///
	/// Only the leading integer is used. Zero checks the head block alone;
	/// negative or non-numeric values fall back to the default.
	#[arg(value_name = "MINUTES", allow_hyphen_values = true)]
	minutes: Option<String>,

	/// JSON file listing the networks to check, replacing the built-in list
	#[arg(long, value_name = "PATH")]
	networks: Option<PathBuf>,

	/// Write logs to file instead of stderr
	#[arg(long)]
	log_file: bool,

	/// Set log level (trace, debug, info, warn, error)
	#[arg(long, value_name = "LEVEL")]
	log_level: Option<String>,

	/// Path to store log files (default: logs/)
	#[arg(long, value_name = "PATH")]
	log_path: Option<String>,

	/// Validate the network registry without contacting any provider
	#[arg(long)]
	check: bool,
}

impl Cli {
	/// Apply CLI options to environment variables, overriding any existing values
	fn apply_to_env(&self) {
		// Reload environment variables from .env file
		// Override any existing environment variables
		dotenv_override().ok();

		// Log file mode - override if CLI flag is set
		if self.log_file {
			set_var("LOG_MODE", "file");
		}

		// Set log level from RUST_LOG if it exists
		if let Ok(level) = var("RUST_LOG") {
			set_var("LOG_LEVEL", level);
		}

		// Log level - override if CLI flag is set
		if let Some(level) = &self.log_level {
			set_var("LOG_LEVEL", level);
			set_var("RUST_LOG", level);
		}

		// Log path - override if CLI flag is set
		if let Some(path) = &self.log_path {
			set_var("LOG_DATA_DIR", path);
		}
	}
}

/// Main entry point for the cross-chain send monitor.
///
/// # Errors
/// Returns an error if the network registry is invalid, the HTTP client cannot
/// be built or the report cannot be written to stdout.
#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	// Apply CLI options to environment
	cli.apply_to_env();

	// Setup logging to stderr
	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let lookback_minutes = parse_lookback_minutes(cli.minutes.as_deref());
	let api_key = SecretString::from_env(API_KEY_ENV);

	let networks = load_networks(cli.networks.as_deref(), &api_key).map_err(|e| {
		let reason = format_error_chain(&e);
		error!(trace_id = %e.trace_id(), "{}", reason);
		anyhow::anyhow!(reason)
	})?;

	// If --check flag is provided, only validate configuration and exit
	if cli.check {
		info!("Configuration is valid: {} networks", networks.len());
		return Ok(());
	}

	let monitored_networks = create_monitored_networks(&networks, &HttpClientConfig::from_env())
		.map_err(|e| anyhow::anyhow!("Failed to initialize network clients: {}", e))?;

	info!(
		"Checking {} networks for cross chain sends in the last {} minutes",
		monitored_networks.len(),
		lookback_minutes
	);

	let stdout = std::io::stdout();
	let summary = ReportDriver::new(&monitored_networks, lookback_minutes)
		.run(&mut stdout.lock())
		.await?;

	info!(
		checked = summary.checked,
		with_events = summary.with_events,
		without_events = summary.without_events,
		failed = summary.failed,
		"Report complete"
	);

	Ok(())
}
