//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stderr" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: directory for log files; default is "logs/"
//! - RUST_LOG: full filter directives, overriding LOG_LEVEL when set
//!
//! Log events never go to stdout, which is reserved for the report itself.

pub mod error;

use chrono::{NaiveDate, Utc};
use std::{env, fs::create_dir_all, path::Path};
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Base name of the log file written in file mode.
const LOG_FILE_BASE_NAME: &str = "monitor";

/// Parses a log level name, falling back to `INFO` for anything unknown.
pub fn parse_log_level(level: &str) -> tracing::Level {
	match level.trim().to_lowercase().as_str() {
		"trace" => tracing::Level::TRACE,
		"debug" => tracing::Level::DEBUG,
		"info" => tracing::Level::INFO,
		"warn" => tracing::Level::WARN,
		"error" => tracing::Level::ERROR,
		_ => tracing::Level::INFO,
	}
}

/// Computes the file name of the log file for the given day.
pub fn compute_log_file_name(date: NaiveDate) -> String {
	format!("{}-{}.log", LOG_FILE_BASE_NAME, date.format("%Y-%m-%d"))
}

/// Creates a log format with configurable ANSI support
fn create_log_format(with_ansi: bool) -> fmt::format::Format<fmt::format::Compact> {
	fmt::format()
		.with_level(true)
		.with_target(true)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_ansi(with_ansi)
		.compact()
}

/// Sets up logging by reading configuration from environment variables.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error>> {
	let log_mode = env::var("LOG_MODE").unwrap_or_else(|_| "stderr".to_string());
	let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
	let level_filter = parse_log_level(&log_level);

	// RUST_LOG directives take precedence over LOG_LEVEL
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level_filter.to_string()));
	let subscriber = tracing_subscriber::registry().with(env_filter);

	if log_mode.to_lowercase() == "file" {
		let log_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| "logs/".to_string());
		let log_dir = Path::new(log_dir.trim_end_matches('/')).to_path_buf();
		create_dir_all(&log_dir)?;

		let file_name = compute_log_file_name(Utc::now().date_naive());
		let file_appender = tracing_appender::rolling::never(&log_dir, &file_name);

		subscriber
			.with(
				fmt::layer()
					.event_format(create_log_format(false))
					.with_writer(file_appender),
			)
			.try_init()?;

		info!(
			"Logging to file: {}",
			log_dir.join(file_name).display()
		);
	} else {
		subscriber
			.with(
				fmt::layer()
					.event_format(create_log_format(true))
					.with_writer(std::io::stderr),
			)
			.try_init()?;
	}

	info!("Logging is successfully configured (mode: {})", log_mode);
	Ok(())
}
