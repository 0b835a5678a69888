//! Conversion of a lookback duration into a block range.

/// Block range covering a lookback duration on one network
///
/// The range is an estimate based on the average block time of the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockWindow {
	/// First block of the range. Negative when the duration reaches back past
	/// genesis; the value is never clamped.
	pub from_block: i128,
	/// Last block of the range, the chain head observed before the query
	pub to_block: u64,
	/// Number of blocks expected in the duration, possibly fractional
	pub blocks_in_window: f64,
}

impl BlockWindow {
	/// Computes the range for `lookback_minutes` ending at `current_height`.
	///
	/// The start block is `current_height - minutes * 60 / block_time_seconds`,
	/// evaluated in floating point and truncated toward zero.
	pub fn compute(current_height: u64, lookback_minutes: u64, block_time_seconds: f64) -> Self {
		let blocks_in_window = (lookback_minutes as f64 * 60.0) / block_time_seconds;
		let from_block = (current_height as f64 - blocks_in_window).trunc() as i128;

		Self {
			from_block,
			to_block: current_height,
			blocks_in_window,
		}
	}

	/// Whether the range starts before genesis
	pub fn starts_before_genesis(&self) -> bool {
		self.from_block < 0
	}
}
