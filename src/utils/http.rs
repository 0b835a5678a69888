//! HTTP client construction for the RPC transports.
//!
//! All networks share a single `reqwest::Client` so connections are pooled
//! per host. Requests are never retried: a failed request is reported as a
//! failure of the network it belongs to.

use std::{env, time::Duration};

use crate::utils::constants::{DEFAULT_RPC_TIMEOUT_SECONDS, RPC_TIMEOUT_ENV};

/// Timeouts applied to every RPC request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
	/// Total time allowed for a single request, including reading the body
	pub timeout: Duration,
	/// Time allowed to establish the TCP/TLS connection
	pub connect_timeout: Duration,
	/// How long idle pooled connections are kept
	pub pool_idle_timeout: Duration,
}

impl Default for HttpClientConfig {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECONDS),
			connect_timeout: Duration::from_secs(20),
			pool_idle_timeout: Duration::from_secs(90),
		}
	}
}

impl HttpClientConfig {
	/// Builds the configuration, honouring `RPC_TIMEOUT_SECONDS` when set.
	pub fn from_env() -> Self {
		Self::with_timeout_override(env::var(RPC_TIMEOUT_ENV).ok().as_deref())
	}

	/// Applies a raw timeout override (in seconds) on top of the defaults.
	///
	/// Values that are not a positive integer are ignored.
	pub fn with_timeout_override(raw: Option<&str>) -> Self {
		let mut config = Self::default();
		if let Some(seconds) = raw
			.and_then(|value| value.trim().parse::<u64>().ok())
			.filter(|seconds| *seconds > 0)
		{
			config.timeout = Duration::from_secs(seconds);
			config.connect_timeout = config.connect_timeout.min(config.timeout);
		}
		config
	}
}

/// Creates the HTTP client shared by all RPC transports
pub fn create_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, reqwest::Error> {
	reqwest::ClientBuilder::new()
		.pool_idle_timeout(config.pool_idle_timeout)
		.pool_max_idle_per_host(8)
		.timeout(config.timeout)
		.connect_timeout(config.connect_timeout)
		.build()
}
