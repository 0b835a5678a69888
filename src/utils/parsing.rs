//! Parsing utilities
//!
//! This module provides utilities for parsing various types of data.

use crate::utils::constants::DEFAULT_LOOKBACK_MINUTES;

/// Parses the lookback window argument into a number of minutes.
///
/// The leading integer of the argument is used (`"30"` and `"30min"` both give
/// 30), after skipping leading whitespace and an optional `+` sign. A leading
/// zero gives 0 (`"0x10"` is read as 0), which queries only the head block.
///
/// A missing argument falls back to [`DEFAULT_LOOKBACK_MINUTES`], as does one
/// without leading digits, a negative one or one that does not fit in a `u64`.
/// Parsing never fails.
pub fn parse_lookback_minutes(arg: Option<&str>) -> u64 {
	let Some(arg) = arg else {
		return DEFAULT_LOOKBACK_MINUTES;
	};

	let trimmed = arg.trim_start();
	let (negative, unsigned) = match trimmed.as_bytes().first() {
		Some(b'-') => (true, &trimmed[1..]),
		Some(b'+') => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};

	let digits_len = unsigned
		.bytes()
		.take_while(|byte| byte.is_ascii_digit())
		.count();

	if negative || digits_len == 0 {
		return DEFAULT_LOOKBACK_MINUTES;
	}

	unsigned[..digits_len]
		.parse::<u64>()
		.unwrap_or(DEFAULT_LOOKBACK_MINUTES)
}

/// Normalizes a string by trimming whitespace and converting to lowercase.
///
/// This is useful for case-insensitive comparisons and removing leading/trailing whitespace.
pub fn normalize_string(input: &str) -> String {
	input.trim().to_lowercase()
}
