//! Constants shared across the application.

/// Lookback window used when no usable window is given on the command line
pub const DEFAULT_LOOKBACK_MINUTES: u64 = 60;

/// Maximum number of events reported per network
pub const MAX_REPORTED_EVENTS: usize = 5;

/// Environment variable holding the RPC provider API key
pub const API_KEY_ENV: &str = "ALCHEMY_KEY";

/// Environment variable overriding the per-request RPC timeout
pub const RPC_TIMEOUT_ENV: &str = "RPC_TIMEOUT_SECONDS";

/// Per-request RPC timeout in seconds
pub const DEFAULT_RPC_TIMEOUT_SECONDS: u64 = 30;
